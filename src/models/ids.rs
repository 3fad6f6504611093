//! Six-digit numeric user identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a user id
pub const USER_ID_DIGITS: usize = 6;

/// A user identifier: exactly six ASCII digits, zero padded ("000042")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Build an id from the last six decimal digits of a number
    pub fn wrapping(n: u32) -> Self {
        Self(format!("{:06}", n % 1_000_000))
    }

    /// Parse an id, requiring exactly six digits
    pub fn parse(s: &str) -> Result<Self, InvalidUserId> {
        if s.len() == USER_ID_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidUserId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidUserId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Error for strings that aren't six-digit ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUserId(pub String);

impl fmt::Display for InvalidUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid user id '{}': expected {} digits", self.0, USER_ID_DIGITS)
    }
}

impl std::error::Error for InvalidUserId {}
