//! Custom error types for BudgetBuddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for BudgetBuddy operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for amounts, dates, rates, states and names
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Every candidate identifier collided with an existing one
    #[error("Unable to generate a unique user id after {attempts} attempts")]
    IdGeneration { attempts: u32 },
}

impl BudgetError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for usernames
    pub fn duplicate_username(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Username",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for user ids
    pub fn duplicate_user_id(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User id",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    ///
    /// Duplicate names and ids count as validation failures: the caller is
    /// expected to ask for a different value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgetBuddy operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::user_not_found("alice");
        assert_eq!(err.to_string(), "User not found: alice");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_is_validation() {
        let err = BudgetError::duplicate_username("alice");
        assert_eq!(err.to_string(), "Username already exists: alice");
        assert!(err.is_validation());
    }

    #[test]
    fn test_id_generation_error() {
        let err = BudgetError::IdGeneration { attempts: 1000 };
        assert_eq!(
            err.to_string(),
            "Unable to generate a unique user id after 1000 attempts"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
