//! Record display formatting
//!
//! Renders income and expense lists as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Money, Record, RecordKind};
use crate::services::aggregate;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format records as a table followed by their total
pub fn format_record_table(records: &[Record], kind: RecordKind) -> String {
    if records.is_empty() {
        return match kind {
            RecordKind::Income => "No income recorded.\n".to_string(),
            RecordKind::Expense => "No expenses recorded.\n".to_string(),
        };
    }

    let mut table = match kind {
        RecordKind::Income => Table::new(records.iter().map(|r| IncomeRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            source: r.category.clone(),
            amount: r.amount.to_string(),
        })),
        RecordKind::Expense => Table::new(records.iter().map(|r| ExpenseRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            category: r.category.clone(),
            description: truncate(&r.description, DESCRIPTION_WIDTH),
            amount: r.amount.to_string(),
        })),
    };
    table.with(Style::psql());

    let total: Money = aggregate::total(records);
    format!(
        "{}\n{} record(s), total {}\n",
        table,
        records.len(),
        total
    )
}
