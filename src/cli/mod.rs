//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod import;
pub mod income;
pub mod report;
pub mod tax;
pub mod user;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::{handle_import_command, handle_restore_command};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use tax::handle_tax_command;
pub use user::{handle_user_command, UserCommands};

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::record::parse_date_with_format;
use crate::models::{Money, MonthYear};

/// Parse a user-supplied amount such as "12.50" or "$1,200"
pub(crate) fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a date in the configured format, defaulting to today
pub(crate) fn parse_date_or_today(s: Option<&str>, settings: &Settings) -> BudgetResult<NaiveDate> {
    match s {
        Some(s) => parse_date_with_format(s, &settings.date_format)
            .map_err(|e| BudgetError::Validation(e.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a `YYYY-MM` period, defaulting to the current month
pub(crate) fn parse_period(s: Option<&str>) -> BudgetResult<MonthYear> {
    MonthYear::parse_or_current(s).map_err(|e| BudgetError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,200.5").unwrap(), Money::from_cents(120050));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date_uses_settings_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            parse_date_or_today(Some("31/01/2024"), &settings).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert!(parse_date_or_today(Some("2024-01-31"), &settings).is_err());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period(Some("2024-03")).unwrap(),
            MonthYear::new(2024, 3).unwrap()
        );
        assert!(parse_period(Some("2024-13")).unwrap_err().is_validation());
        assert_eq!(parse_period(None).unwrap(), MonthYear::current());
    }
}
