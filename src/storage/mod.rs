//! Storage layer for BudgetBuddy
//!
//! Flat files only: a JSON ledger, a comma separated user list, JSON
//! profiles and JSON report exports. Files are read whole and rewritten
//! whole; JSON writes go through a temp file and a rename.

pub mod file_io;
pub mod ledger;
pub mod profiles;
pub mod reports;
pub mod users;

pub use file_io::{read_json, read_json_optional, write_json_atomic};
pub use ledger::LedgerRepository;
pub use profiles::ProfileRepository;
pub use reports::ReportRepository;
pub use users::UserRepository;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub ledger: LedgerRepository,
    pub users: UserRepository,
    pub profiles: ProfileRepository,
    pub reports: ReportRepository,
}

impl Storage {
    /// Create a new Storage instance, creating the directory layout
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            users: UserRepository::new(paths.users_file()),
            profiles: ProfileRepository::new(paths.profiles_dir()),
            reports: ReportRepository::new(paths.reports_dir()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load the ledger and user list from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.ledger.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").join("profiles").exists());
        assert!(temp_dir.path().join("data").join("reports").exists());
        assert!(!storage.is_initialized());
        assert!(storage.ledger.get().is_empty());
        assert!(storage.users.get_all().is_empty());
    }
}
