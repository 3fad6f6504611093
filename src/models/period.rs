//! Month/year period used to group records
//!
//! Reports are built per calendar month; `MonthYear` is the grouping key.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month of a specific year
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

/// Errors produced when building or parsing a period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidMonth(u32),
    InvalidYear(i32),
    InvalidFormat(String),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "Invalid month {}: expected 1-12", m),
            Self::InvalidYear(y) => write!(f, "Invalid year {}: expected a 4-digit year", y),
            Self::InvalidFormat(s) => write!(f, "Invalid period '{}': expected YYYY-MM", s),
        }
    }
}

impl std::error::Error for PeriodError {}

impl MonthYear {
    /// Create a validated period
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if !(1000..=9999).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human friendly form, e.g. "January 2025"
    pub fn friendly(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }

    /// Parse "YYYY-MM", or fall back to the current month when absent
    pub fn parse_or_current(s: Option<&str>) -> Result<Self, PeriodError> {
        match s {
            Some(s) => s.parse(),
            None => Ok(Self::current()),
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthYear {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 {
            return Err(PeriodError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}
