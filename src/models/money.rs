//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest amount `Money::parse` accepts, one trillion in cents
pub const MAX_PARSED_CENTS: i64 = 100_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetbuddy::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    ///
    /// # Examples
    /// ```
    /// use budgetbuddy::models::Money;
    /// let amount = Money::from_dollars_cents(10, 50); // $10.50
    /// ```
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by a factor, rounding to the nearest cent
    ///
    /// Used for tax rates and budget percentages.
    pub fn scale(&self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// Share of `total` this amount represents, as a percentage
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "$1,234.50", "10", ".5".
    /// Amounts are rounded to the nearest cent, half away from zero. A
    /// non-zero amount below half a cent and anything above
    /// [`MAX_PARSED_CENTS`] are errors.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();

        let (dollars_str, cents_str) = match s.split_once('.') {
            Some((d, c)) => (d, c),
            None => (s.as_str(), ""),
        };

        if dollars_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        if !dollars_str.chars().all(|c| c.is_ascii_digit())
            || !cents_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = if dollars_str.is_empty() {
            0
        } else {
            dollars_str.parse().map_err(|_| invalid())?
        };

        // Pad to 2 digits, rounding on the third
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => {
                let whole: i64 = cents_str[..2].parse().map_err(|_| invalid())?;
                if cents_str.as_bytes()[2] >= b'5' {
                    whole + 1
                } else {
                    whole
                }
            }
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|total| *total <= MAX_PARSED_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))?;

        if total == 0 && cents_str.bytes().any(|b| b != b'0') {
            return Err(MoneyParseError::BelowOneCent(original.to_string()));
        }

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol and thousands grouping
    ///
    /// Negative amounts put the minus sign before the symbol: `-$1,234.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.0.unsigned_abs() / 100),
            self.cents_part()
        )
    }

    /// Plain decimal form without symbol or grouping, e.g. `-1234.50`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            self.0.unsigned_abs() / 100,
            self.cents_part()
        )
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers work in report tables
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
    BelowOneCent(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: {}", s),
            MoneyParseError::BelowOneCent(s) => {
                write!(f, "Amount {} rounds to zero; the smallest unit is 0.01", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(123450).to_string(), "$1,234.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
        assert_eq!(Money::from_cents(99_999).to_string(), "$999.99");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(-123450).to_string(), "-$1,234.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>10}", Money::from_cents(1050)), "    $10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123450).format_with_symbol("€"), "€1,234.50");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(123450).to_decimal_string(), "1234.50");
        assert_eq!(Money::from_cents(-7).to_decimal_string(), "-0.07");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_scale_rounds() {
        assert_eq!(Money::from_cents(5_000_000).scale(0.8).cents(), 4_000_000);
        assert_eq!(Money::from_cents(333).scale(0.5).cents(), 167);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("$1,234.50").unwrap().cents(), 123450);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1.234").unwrap().cents(), 123);
        assert_eq!(Money::parse("1.239").unwrap().cents(), 124);
        assert_eq!(Money::parse("0.995").unwrap().cents(), 100);
        assert_eq!(Money::parse("-0.005").unwrap().cents(), -1);
        assert_eq!(Money::parse("0.000").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_sub_cent_is_explicit_error() {
        assert_eq!(
            Money::parse("0.004"),
            Err(MoneyParseError::BelowOneCent("0.004".to_string()))
        );
    }

    #[test]
    fn test_parse_caps_amounts() {
        assert_eq!(
            Money::parse("1000000000000").unwrap().cents(),
            MAX_PARSED_CENTS
        );
        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758"),
            Err(MoneyParseError::OutOfRange(_))
        ));

        let max = Money::parse("1000000000000").unwrap();
        let total: Money = std::iter::repeat(max).take(1000).sum();
        assert_eq!(total.cents(), MAX_PARSED_CENTS * 1000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(Money::parse("1.é").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
