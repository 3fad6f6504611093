//! Expense CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, parse_period};
use crate::config::settings::Settings;
use crate::display::format_record_table;
use crate::error::BudgetResult;
use crate::models::RecordKind;
use crate::services::{RecordService, RecordTarget};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent (must be positive)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Spending category (e.g., "Groceries")
        category: String,

        /// What the money was spent on
        description: String,

        /// Date spent (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Record against this user's profile instead of the shared ledger
        #[arg(short, long)]
        user: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Only show one month (e.g., "2025-01")
        #[arg(short, long)]
        period: Option<String>,

        /// List this user's profile expenses instead of the shared ledger
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = RecordService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
            user,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref(), settings)?;
            let target = RecordTarget::from_user(user.as_deref());
            let record = service.add_expense(target, amount, &category, &description, date)?;

            println!(
                "Added expense: {} for {} ({}) on {}",
                record.amount.format_with_symbol(&settings.currency_symbol),
                record.category,
                record.description,
                record.date.format(&settings.date_format)
            );
        }

        ExpenseCommands::List { period, user } => {
            let period = period.as_deref().map(|p| parse_period(Some(p))).transpose()?;
            let records = service.list_expenses(RecordTarget::from_user(user.as_deref()), period)?;
            print!("{}", format_record_table(&records, RecordKind::Expense));
        }
    }

    Ok(())
}
