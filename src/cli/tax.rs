//! Tax calculator command

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::report::format_percentage;
use crate::error::BudgetResult;
use crate::services::tax;

/// Print the tax withheld and net income for a gross amount
pub fn handle_tax_command(gross: &str, rate: Option<&str>, settings: &Settings) -> BudgetResult<()> {
    let gross = parse_amount(gross)?;
    let rate = match rate {
        Some(rate) => tax::parse_rate(rate)?,
        None => settings.default_tax_rate,
    };

    let withheld = tax::tax_amount(gross, rate)?;
    let net = tax::net_income(gross, rate)?;
    let symbol = &settings.currency_symbol;

    let tax_label = format!("Tax ({}):", format_percentage(rate * 100.0));

    println!("{:<15}{:>16}", "Gross Income:", gross.format_with_symbol(symbol));
    println!("{:<15}{:>16}", tax_label, (-withheld).format_with_symbol(symbol));
    println!("{:<15}{:>16}", "Net Income:", net.format_with_symbol(symbol));

    Ok(())
}
