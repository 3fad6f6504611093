//! Income CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, parse_period};
use crate::config::settings::Settings;
use crate::display::format_record_table;
use crate::error::BudgetResult;
use crate::models::RecordKind;
use crate::services::RecordService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Where the money came from (e.g., "Salary")
        source: String,

        /// Date received (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded income
    List {
        /// Only show one month (e.g., "2025-01")
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let service = RecordService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref(), settings)?;
            let record = service.add_income(amount, &source, date)?;

            println!(
                "Added income: {} from {} on {}",
                record.amount.format_with_symbol(&settings.currency_symbol),
                record.category,
                record.date.format(&settings.date_format)
            );
        }

        IncomeCommands::List { period } => {
            let period = period.as_deref().map(|p| parse_period(Some(p))).transpose()?;
            let records = service.list_income(period);
            print!("{}", format_record_table(&records, RecordKind::Income));
        }
    }

    Ok(())
}
