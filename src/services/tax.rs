//! Flat-rate tax calculation

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Check a gross amount and rate without computing anything
pub fn validate(gross: Money, rate: f64) -> BudgetResult<()> {
    if gross.is_negative() {
        return Err(BudgetError::Validation(
            "Salary cannot be negative".to_string(),
        ));
    }
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&rate) {
        return Err(BudgetError::Validation(format!(
            "Tax rate must be between 0 and 1, got {}",
            rate
        )));
    }
    Ok(())
}

/// Income left after a flat tax: `gross * (1 - rate)`
pub fn net_income(gross: Money, rate: f64) -> BudgetResult<Money> {
    validate(gross, rate)?;
    Ok(gross - gross.scale(rate))
}

/// The withheld portion: `gross * rate`
pub fn tax_amount(gross: Money, rate: f64) -> BudgetResult<Money> {
    validate(gross, rate)?;
    Ok(gross.scale(rate))
}

/// Parse a rate given either as a fraction ("0.2") or a percentage ("20%")
pub fn parse_rate(s: &str) -> BudgetResult<f64> {
    let s = s.trim();
    let invalid = || BudgetError::Validation(format!("Invalid tax rate: '{}'", s));

    let rate = match s.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().map_err(|_| invalid())? / 100.0,
        None => s.parse::<f64>().map_err(|_| invalid())?,
    };

    if !(0.0..=1.0).contains(&rate) {
        return Err(BudgetError::Validation(format!(
            "Tax rate must be between 0 and 1, got {}",
            rate
        )));
    }
    Ok(rate)
}
