//! Budget analysis for one user and month
//!
//! Combines the user's gross income and flat tax rate with their expenses
//! for the month: after-tax income, spending per category, the category
//! used most often and what's left over.

use std::collections::BTreeMap;

use crate::display::report::{double_separator, format_percentage, separator};
use crate::error::BudgetResult;
use crate::models::{Money, MonthYear, Record};
use crate::services::{aggregate, tax};

/// Budget analysis report
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub username: String,
    pub period: MonthYear,
    pub gross_income: Money,
    pub tax_rate: f64,
    pub after_tax_income: Money,
    pub total_spending: Money,
    pub category_breakdown: BTreeMap<String, Money>,
    pub most_frequent_category: Option<String>,
    pub transaction_count: usize,
    /// After-tax income minus spending; negative when overspent
    pub remaining: Money,
}

impl BudgetReport {
    /// Build the report from the month's expenses
    ///
    /// `expenses` may span several months; only those in `period` count.
    pub fn generate(
        username: &str,
        period: MonthYear,
        gross_income: Money,
        tax_rate: f64,
        expenses: &[Record],
    ) -> BudgetResult<Self> {
        let after_tax_income = tax::net_income(gross_income, tax_rate)?;
        let in_period = aggregate::records_in_period(expenses, period);

        let total_spending = aggregate::total(in_period.iter().copied());
        let category_breakdown = aggregate::totals_by_category(in_period.iter().copied());
        let most_frequent_category =
            aggregate::most_frequent_category(in_period.iter().copied()).map(str::to_string);

        Ok(Self {
            username: username.to_string(),
            period,
            gross_income,
            tax_rate,
            after_tax_income,
            total_spending,
            category_breakdown,
            most_frequent_category,
            transaction_count: in_period.len(),
            remaining: after_tax_income - total_spending,
        })
    }

    /// Tax withheld from the gross income
    pub fn tax_withheld(&self) -> Money {
        self.gross_income - self.after_tax_income
    }

    /// Whether spending exceeded after-tax income
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "=== {}'s Budget Report: {} ===\n",
            self.username,
            self.period.friendly()
        ));
        output.push_str(&format!("Gross Income:           {:>14}\n", self.gross_income));
        output.push_str(&format!(
            "Tax ({}):             {:>14}\n",
            format_percentage(self.tax_rate * 100.0),
            -self.tax_withheld()
        ));
        output.push_str(&format!("After-Tax Income:       {:>14}\n", self.after_tax_income));
        output.push_str(&format!("Total Spending:         {:>14}\n", self.total_spending));
        output.push_str(&format!(
            "Most Frequent Category: {:>14}\n",
            self.most_frequent_category.as_deref().unwrap_or("None")
        ));
        output.push_str(&separator(39));
        output.push('\n');
        output.push_str(&format!("Remaining Balance:      {:>14}\n", self.remaining));
        output.push_str(&double_separator(39));
        output.push('\n');

        if self.is_overspent() {
            output.push_str("Warning: spending is above after-tax income.\n");
        }

        if !self.category_breakdown.is_empty() {
            output.push_str("\nSpending by Category:\n");
            for (category, amount) in &self.category_breakdown {
                output.push_str(&format!(
                    "  {:<22} {:>14} {:>7}\n",
                    category,
                    amount,
                    format_percentage(amount.percent_of(self.total_spending))
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(dollars: i64, category: &str, date: &str) -> Record {
        Record::expense(
            Money::from_dollars_cents(dollars, 0),
            category,
            "",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
        .unwrap()
    }

    fn january() -> MonthYear {
        MonthYear::new(2024, 1).unwrap()
    }

    #[test]
    fn test_generate() {
        let expenses = vec![
            expense(1200, "Housing", "2024-01-05"),
            expense(300, "Food", "2024-01-10"),
            expense(75, "Food", "2024-01-20"),
            expense(999, "Food", "2024-02-01"),
        ];

        let report = BudgetReport::generate(
            "alice",
            january(),
            Money::from_dollars_cents(5000, 0),
            0.2,
            &expenses,
        )
        .unwrap();

        assert_eq!(report.after_tax_income, Money::from_dollars_cents(4000, 0));
        assert_eq!(report.total_spending, Money::from_dollars_cents(1575, 0));
        assert_eq!(report.remaining, Money::from_dollars_cents(2425, 0));
        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.most_frequent_category.as_deref(), Some("Food"));
        assert_eq!(
            report.category_breakdown["Food"],
            Money::from_dollars_cents(375, 0)
        );
        assert_eq!(report.tax_withheld(), Money::from_dollars_cents(1000, 0));
        assert!(!report.is_overspent());
    }

    #[test]
    fn test_negative_remaining_is_not_an_error() {
        let expenses = vec![expense(5000, "Housing", "2024-01-05")];

        let report = BudgetReport::generate(
            "bob",
            january(),
            Money::from_dollars_cents(1000, 0),
            0.1,
            &expenses,
        )
        .unwrap();

        assert_eq!(report.remaining, Money::from_dollars_cents(-4100, 0));
        assert!(report.is_overspent());
        assert!(report.format_terminal().contains("-$4,100.00"));
    }

    #[test]
    fn test_invalid_rate_fails() {
        let result = BudgetReport::generate("bob", january(), Money::zero(), 2.0, &[]);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_month() {
        let report = BudgetReport::generate(
            "carol",
            january(),
            Money::from_dollars_cents(100, 0),
            0.0,
            &[],
        )
        .unwrap();

        assert_eq!(report.total_spending, Money::zero());
        assert!(report.most_frequent_category.is_none());
        assert!(report.format_terminal().contains("None"));
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![expense(1234, "Housing", "2024-01-05")];
        let report = BudgetReport::generate(
            "alice",
            january(),
            Money::from_dollars_cents(5000, 0),
            0.2,
            &expenses,
        )
        .unwrap();

        let text = report.format_terminal();
        assert!(text.contains("alice's Budget Report: January 2024"));
        assert!(text.contains("$5,000.00"));
        assert!(text.contains("$4,000.00"));
        assert!(text.contains("$1,234.00"));
        assert!(text.contains("Housing"));
    }
}
