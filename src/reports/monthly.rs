//! Exportable monthly report
//!
//! The machine-readable counterpart of [`BudgetReport`], written to
//! `reports/<username>_report_<YYYY>_<MM>.json`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::BudgetReport;
use crate::models::{Money, MonthYear};

/// Serialized monthly spending report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub username: String,
    pub month: u32,
    pub year: i32,
    pub after_tax_income: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub category_breakdown: BTreeMap<String, Money>,
    pub transaction_count: usize,
    pub generated_date: DateTime<Utc>,
}

impl MonthlyReport {
    /// Snapshot an analysis, stamping it with the current time
    pub fn from_analysis(report: &BudgetReport) -> Self {
        Self {
            username: report.username.clone(),
            month: report.period.month,
            year: report.period.year,
            after_tax_income: report.after_tax_income,
            total_spent: report.total_spending,
            remaining: report.remaining,
            category_breakdown: report.category_breakdown.clone(),
            transaction_count: report.transaction_count,
            generated_date: Utc::now(),
        }
    }

    /// The month this report covers
    pub fn period(&self) -> MonthYear {
        MonthYear {
            year: self.year,
            month: self.month,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Monthly Report: {} ({})\n",
            self.username,
            self.period().friendly()
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("After-Tax Income:  {:>20}\n", self.after_tax_income));
        output.push_str(&format!("Total Spent:       {:>20}\n", self.total_spent));
        output.push_str(&format!("Remaining:         {:>20}\n", self.remaining));
        output.push_str(&format!("Transactions:      {:>20}\n", self.transaction_count));
        output.push_str(&format!(
            "Generated:         {:>20}\n",
            self.generated_date.format("%Y-%m-%d %H:%M").to_string()
        ));
        output
    }
}
