//! Income and expense records
//!
//! A record is a flat (amount, category, description, date) entry. Income
//! uses the category field for its source ("Salary", "Freelance").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Which side of the ledger a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Expense amounts must be strictly positive
    NonPositiveExpense,
    /// Income amounts may be zero but never negative
    NegativeIncome,
    EmptyCategory,
    InvalidDate(String),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveExpense => write!(f, "Expense amount must be positive"),
            Self::NegativeIncome => write!(f, "Income amount cannot be negative"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::InvalidDate(s) => write!(f, "Invalid date '{}': use YYYY-MM-DD", s),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Record {
    /// Create a validated expense record
    pub fn expense(
        amount: Money,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Self, RecordValidationError> {
        Self::new(RecordKind::Expense, amount, category, description, date)
    }

    /// Create a validated income record
    pub fn income(
        amount: Money,
        source: &str,
        date: NaiveDate,
    ) -> Result<Self, RecordValidationError> {
        Self::new(RecordKind::Income, amount, source, "", date)
    }

    /// Create a validated record of the given kind
    ///
    /// Category and description are trimmed.
    pub fn new(
        kind: RecordKind,
        amount: Money,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            amount,
            category: category.trim().to_string(),
            description: description.trim().to_string(),
            date,
        };
        record.validate(kind)?;
        Ok(record)
    }

    /// Validate the record against the rules for its kind
    pub fn validate(&self, kind: RecordKind) -> Result<(), RecordValidationError> {
        match kind {
            RecordKind::Expense if !self.amount.is_positive() => {
                return Err(RecordValidationError::NonPositiveExpense)
            }
            RecordKind::Income if self.amount.is_negative() => {
                return Err(RecordValidationError::NegativeIncome)
            }
            _ => {}
        }

        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }

        Ok(())
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, RecordValidationError> {
    parse_date_with_format(s, "%Y-%m-%d")
}

/// Parse a calendar date using a strftime format
pub fn parse_date_with_format(s: &str, format: &str) -> Result<NaiveDate, RecordValidationError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .map_err(|_| RecordValidationError::InvalidDate(s.to_string()))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.amount, self.category, self.date)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}
