//! Savings forecast
//!
//! Projects savings forward from the average month on record. A month
//! counts when it has any income or expense; with no records at all the
//! average is taken over one month.

use crate::display::report::separator;
use crate::models::{Ledger, Money};

use super::history::HistoryReport;

/// Months projected when none are given
pub const DEFAULT_FORECAST_MONTHS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsForecast {
    /// Distinct months with records, at least 1
    pub months_on_record: usize,
    pub months_ahead: u32,
    pub average_income: Money,
    pub average_expenses: Money,
    pub average_savings: Money,
    pub projected_savings: Money,
}

impl SavingsForecast {
    pub fn generate(ledger: &Ledger, months_ahead: u32) -> Self {
        Self::from_history(&HistoryReport::generate(ledger), months_ahead)
    }

    pub fn from_history(history: &HistoryReport, months_ahead: u32) -> Self {
        let months_on_record = history.months.len().max(1);
        let overall = history.overall();
        let per_month = 1.0 / months_on_record as f64;

        let average_income = overall.income.scale(per_month);
        let average_expenses = overall.expenses.scale(per_month);

        Self {
            months_on_record,
            months_ahead,
            average_income,
            average_expenses,
            average_savings: average_income - average_expenses,
            projected_savings: overall
                .net()
                .scale(f64::from(months_ahead) / months_on_record as f64),
        }
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Savings Forecast\n");
        output.push_str(&separator(44));
        output.push('\n');
        output.push_str(&format!(
            "Based on {} month(s) of records\n\n",
            self.months_on_record
        ));
        output.push_str(&format!("Average Income:    {:>24}\n", self.average_income));
        output.push_str(&format!("Average Expenses:  {:>24}\n", self.average_expenses));
        output.push_str(&format!("Average Savings:   {:>24}\n", self.average_savings));
        output.push_str(&separator(44));
        output.push('\n');
        output.push_str(&format!(
            "{:<19}{:>24}\n",
            format!("Next {} months:", self.months_ahead),
            self.projected_savings
        ));
        if self.projected_savings.is_negative() {
            output.push_str("\nWarning: at this rate savings shrink every month.\n");
        }
        output
    }
}
