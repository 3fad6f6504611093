//! Path management for BudgetBuddy
//!
//! Resolves where configuration, the ledger, the user list, profiles and
//! exported reports live.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETBUDDY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budgetbuddy` on Linux,
//!    `%APPDATA%\budgetbuddy` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGETBUDDY_DATA_DIR";

/// Manages all paths used by BudgetBuddy
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all BudgetBuddy data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding user profiles
    pub fn profiles_dir(&self) -> PathBuf {
        self.data_dir().join("profiles")
    }

    /// Get the directory holding exported monthly reports
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir().join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the income/expense ledger
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("finance_data.json")
    }

    /// Get the path to the append-only user list
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.txt")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        for dir in [
            self.base_dir.clone(),
            self.data_dir(),
            self.profiles_dir(),
            self.reports_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                BudgetError::Io(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Check if BudgetBuddy has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("budgetbuddy"))
}
