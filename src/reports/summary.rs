//! Monthly financial summary
//!
//! Income, expenses and the remaining balance for one month, expenses by
//! category, and a budget vs actual comparison against the saved plan.

use crate::display::report::{format_percentage, separator};
use crate::models::{Ledger, Money, MonthYear};
use crate::services::aggregate;

/// Planned categories left out of the budget vs actual table
const UNTRACKED_PLAN_LINES: &[&str] = &["Savings"];

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: Money,
    /// Share of the month's total expenses
    pub percentage: f64,
}

/// One row of the budget vs actual table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparison {
    pub category: String,
    pub planned: Money,
    pub spent: Money,
}

impl BudgetComparison {
    /// Planned minus spent; negative when over budget
    pub fn difference(&self) -> Money {
        self.planned - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.planned
    }
}

/// Financial summary for a month
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub period: MonthYear,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses
    pub remaining: Money,
    /// Sorted by amount, largest first
    pub categories: Vec<CategorySpending>,
    /// Empty when no budget plan has been saved
    pub budget: Vec<BudgetComparison>,
}

impl FinancialSummary {
    /// Summarize the ledger for one month
    pub fn generate(ledger: &Ledger, period: MonthYear) -> Self {
        let income_records = aggregate::records_in_period(&ledger.income, period);
        let expense_records = aggregate::records_in_period(&ledger.expenses, period);

        let income = aggregate::total(income_records.iter().copied());
        let expenses = aggregate::total(expense_records.iter().copied());
        let by_category = aggregate::totals_by_category(expense_records.iter().copied());

        let mut categories: Vec<CategorySpending> = by_category
            .iter()
            .map(|(category, amount)| CategorySpending {
                category: category.clone(),
                amount: *amount,
                percentage: amount.percent_of(expenses),
            })
            .collect();
        // Stable sort keeps equal amounts in name order
        categories.sort_by(|a, b| b.amount.cmp(&a.amount));

        let budget = ledger
            .budget_categories
            .iter()
            .filter(|p| !UNTRACKED_PLAN_LINES.contains(&p.category.as_str()))
            .map(|p| BudgetComparison {
                category: p.category.clone(),
                planned: p.amount,
                spent: by_category.get(&p.category).copied().unwrap_or_default(),
            })
            .collect();

        Self {
            period,
            income,
            expenses,
            remaining: income - expenses,
            categories,
            budget,
        }
    }

    /// Check if the month has no income or expenses at all
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Summary for {}\n",
            self.period.friendly()
        ));
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format!("Monthly Income:     {:>16}\n", self.income));
        output.push_str(&format!("Total Expenses:     {:>16}\n", self.expenses));
        output.push_str(&format!("Remaining Balance:  {:>16}\n", self.remaining));

        if !self.categories.is_empty() {
            output.push_str("\nExpenses by Category:\n");
            for line in &self.categories {
                output.push_str(&format!(
                    "  {:<20} {:>14} {:>7}\n",
                    line.category,
                    line.amount,
                    format_percentage(line.percentage)
                ));
            }
        }

        if !self.budget.is_empty() {
            output.push_str("\nBudget vs Actual:\n");
            output.push_str(&format!(
                "  {:<16} {:>12} {:>12} {:>12}\n",
                "Category", "Budgeted", "Spent", "Difference"
            ));
            for row in &self.budget {
                let flag = if row.is_over() { "  OVER" } else { "" };
                output.push_str(&format!(
                    "  {:<16} {:>12} {:>12} {:>12}{}\n",
                    row.category,
                    row.planned,
                    row.spent,
                    row.difference(),
                    flag
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedCategory, Record};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(dollars: i64, category: &str, day: &str) -> Record {
        Record::expense(Money::from_dollars_cents(dollars, 0), category, "", date(day)).unwrap()
    }

    fn sample_ledger() -> Ledger {
        Ledger {
            income: vec![
                Record::income(Money::from_dollars_cents(3000, 0), "Salary", date("2024-05-01"))
                    .unwrap(),
                Record::income(Money::from_dollars_cents(9999, 0), "Salary", date("2024-04-01"))
                    .unwrap(),
            ],
            expenses: vec![
                expense(100, "Groceries", "2024-05-03"),
                expense(1200, "Housing", "2024-05-01"),
                expense(100, "Groceries", "2024-05-20"),
                expense(50, "Entertainment", "2024-05-09"),
                expense(700, "Housing", "2024-04-01"),
            ],
            budget_categories: Vec::new(),
        }
    }

    fn may() -> MonthYear {
        MonthYear::new(2024, 5).unwrap()
    }

    #[test]
    fn test_totals_for_month() {
        let summary = FinancialSummary::generate(&sample_ledger(), may());
        assert_eq!(summary.income, Money::from_dollars_cents(3000, 0));
        assert_eq!(summary.expenses, Money::from_dollars_cents(1450, 0));
        assert_eq!(summary.remaining, Money::from_dollars_cents(1550, 0));
        assert!(summary.budget.is_empty());
    }

    #[test]
    fn test_categories_sorted_descending() {
        let summary = FinancialSummary::generate(&sample_ledger(), may());
        let names: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Groceries", "Entertainment"]);

        let housing = &summary.categories[0];
        assert!((housing.percentage - 1200.0 / 1450.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_vs_actual_skips_savings() {
        let mut ledger = sample_ledger();
        ledger.budget_categories = vec![
            PlannedCategory::new("Housing", Money::from_dollars_cents(900, 0)),
            PlannedCategory::new("Groceries", Money::from_dollars_cents(300, 0)),
            PlannedCategory::new("Shopping", Money::from_dollars_cents(150, 0)),
            PlannedCategory::new("Savings", Money::from_dollars_cents(600, 0)),
        ];

        let summary = FinancialSummary::generate(&ledger, may());
        assert_eq!(summary.budget.len(), 3);
        assert!(summary.budget.iter().all(|b| b.category != "Savings"));

        let housing = &summary.budget[0];
        assert!(housing.is_over());
        assert_eq!(housing.difference(), Money::from_dollars_cents(-300, 0));

        let shopping = &summary.budget[2];
        assert_eq!(shopping.spent, Money::zero());
        assert!(!shopping.is_over());

        let text = summary.format_terminal();
        assert!(text.contains("Budget vs Actual"));
        assert!(text.contains("OVER"));
        assert!(!text.contains("Savings"));
    }

    #[test]
    fn test_empty_month() {
        let summary =
            FinancialSummary::generate(&sample_ledger(), MonthYear::new(2023, 1).unwrap());
        assert!(summary.is_empty());
        assert!(summary.categories.is_empty());
        assert!(summary.format_terminal().contains("January 2023"));
    }
}
