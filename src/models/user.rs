//! User and user profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use super::money::Money;
use super::record::Record;
use super::state::normalize_state;

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    /// Usernames end up in file names and the comma separated user list
    InvalidUsernameChar(char),
    InvalidState(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::InvalidUsernameChar(c) => {
                write!(f, "Username cannot contain '{}'", c.escape_default())
            }
            Self::InvalidState(s) => write!(f, "Invalid state: '{}'", s),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub state: Option<String>,
    pub user_id: UserId,
}

impl User {
    /// Create a user from already-cleaned parts
    ///
    /// Uniqueness against other users is the caller's concern.
    pub fn new(
        username: &str,
        state: Option<&str>,
        user_id: UserId,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: clean_username(username)?,
            state: clean_state(state)?,
            user_id,
        })
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User({}, {}, id={})",
            self.username,
            self.state.as_deref().unwrap_or("None"),
            self.user_id
        )
    }
}

/// Trim and validate a username
pub fn clean_username(username: &str) -> Result<String, UserValidationError> {
    let u = username.trim();
    if u.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }
    if let Some(c) = u
        .chars()
        .find(|c| matches!(c, ',' | '/' | '\\') || c.is_control())
    {
        return Err(UserValidationError::InvalidUsernameChar(c));
    }
    Ok(u.to_string())
}

/// Validate an optional state name, normalizing it to title case
pub fn clean_state(state: Option<&str>) -> Result<Option<String>, UserValidationError> {
    match state {
        None => Ok(None),
        Some(s) => normalize_state(s)
            .map(|canonical| Some(canonical.to_string()))
            .ok_or_else(|| UserValidationError::InvalidState(s.trim().to_string())),
    }
}

/// Saved financial profile for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,

    /// Gross monthly income
    #[serde(default)]
    pub income: Money,

    #[serde(default)]
    pub state: Option<String>,

    /// Flat tax rate in [0, 1]
    #[serde(default)]
    pub tax_rate: f64,

    /// The user's expense records
    #[serde(default)]
    pub transactions: Vec<Record>,

    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile for a user
    pub fn new(user: &User, income: Money, tax_rate: f64) -> Self {
        Self {
            username: user.username.clone(),
            income,
            state: user.state.clone(),
            tax_rate,
            transactions: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Mark the profile as modified now
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
