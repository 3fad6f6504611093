//! User settings for BudgetBuddy
//!
//! Manages user preferences including the currency symbol, the date format
//! used for input and display, and the default flat tax rate.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings for BudgetBuddy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Flat tax rate applied when a profile doesn't carry its own
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: f64,

    /// Active username, used when a command doesn't name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_tax_rate() -> f64 {
    0.2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_tax_rate: default_tax_rate(),
            username: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_tax_rate, 0.2);
        assert!(settings.username.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_tax_rate = 0.25;
        settings.username = Some("alice".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.default_tax_rate, 0.2);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
