//! Budget suggestion service
//!
//! Splits a month's income by the 50/30/20 rule (needs, wants, savings)
//! and breaks each share into planned categories. The plan is saved in the
//! ledger, where the financial summary compares it against spending.

use tracing::info;

use crate::display::report::double_separator;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, MonthYear, PlannedCategory};
use crate::services::aggregate;
use crate::storage::Storage;

pub const NEEDS_SHARE: f64 = 0.50;
pub const WANTS_SHARE: f64 = 0.30;
pub const SAVINGS_SHARE: f64 = 0.20;

/// Split of the needs share
const NEEDS_PLAN: [(&str, f64); 4] = [
    ("Housing", 0.60),
    ("Utilities", 0.10),
    ("Groceries", 0.20),
    ("Transportation", 0.10),
];

/// Split of the wants share
const WANTS_PLAN: [(&str, f64); 3] = [
    ("Entertainment", 0.40),
    ("Dining Out", 0.30),
    ("Shopping", 0.30),
];

/// A 50/30/20 budget for one month's income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSuggestion {
    pub period: MonthYear,
    pub income: Money,
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
    /// Planned amount per category, in display order
    pub categories: Vec<PlannedCategory>,
}

impl BudgetSuggestion {
    /// Build the suggestion for a monthly income
    ///
    /// Zero income has nothing to split and is rejected.
    pub fn for_income(period: MonthYear, income: Money) -> BudgetResult<Self> {
        if !income.is_positive() {
            return Err(BudgetError::Validation(
                "No income data available; add income first".to_string(),
            ));
        }

        let needs = income.scale(NEEDS_SHARE);
        let wants = income.scale(WANTS_SHARE);
        let savings = income.scale(SAVINGS_SHARE);

        let mut categories: Vec<PlannedCategory> = NEEDS_PLAN
            .iter()
            .map(|(name, share)| PlannedCategory::new(*name, needs.scale(*share)))
            .chain(
                WANTS_PLAN
                    .iter()
                    .map(|(name, share)| PlannedCategory::new(*name, wants.scale(*share))),
            )
            .collect();
        categories.push(PlannedCategory::new("Savings", savings));

        Ok(Self {
            period,
            income,
            needs,
            wants,
            savings,
            categories,
        })
    }

    /// Format the suggestion for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&double_separator(50));
        output.push('\n');
        output.push_str(&format!(
            "Budget Recommendation (50/30/20 Rule): {}\n",
            self.period.friendly()
        ));
        output.push_str(&double_separator(50));
        output.push('\n');
        output.push_str(&format!("Monthly Income: {}\n\n", self.income));
        output.push_str("Recommended Allocation:\n");
        output.push_str(&format!("  Needs (50%):    {:>14}\n", self.needs));
        output.push_str("    Housing, utilities, groceries, transportation\n");
        output.push_str(&format!("  Wants (30%):    {:>14}\n", self.wants));
        output.push_str("    Entertainment, dining out, shopping\n");
        output.push_str(&format!("  Savings (20%):  {:>14}\n", self.savings));
        output.push_str("    Emergency fund, investments, debt repayment\n\n");

        output.push_str("Detailed Category Breakdown:\n");
        for planned in &self.categories {
            output.push_str(&format!(
                "  {:.<20} {:>12}\n",
                planned.category, planned.amount
            ));
        }
        output
    }
}

/// Service for budget planning
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total ledger income for a month
    pub fn monthly_income(&self, period: MonthYear) -> Money {
        let income = self.storage.ledger.income();
        aggregate::total(aggregate::records_in_period(&income, period))
    }

    /// Suggest a budget from the month's income and save it as the plan
    pub fn suggest(&self, period: MonthYear) -> BudgetResult<BudgetSuggestion> {
        let suggestion = BudgetSuggestion::for_income(period, self.monthly_income(period))?;

        self.storage
            .ledger
            .set_budget_plan(suggestion.categories.clone());
        self.storage.ledger.save()?;
        info!(period = %period, income = %suggestion.income, "saved budget plan");

        Ok(suggestion)
    }

    /// The saved plan; empty when none has been suggested yet
    pub fn plan(&self) -> Vec<PlannedCategory> {
        self.storage.ledger.budget_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::Record;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn june() -> MonthYear {
        MonthYear::new(2024, 6).unwrap()
    }

    #[test]
    fn test_fifty_thirty_twenty() {
        let suggestion =
            BudgetSuggestion::for_income(june(), Money::from_dollars_cents(4000, 0)).unwrap();

        assert_eq!(suggestion.needs, Money::from_dollars_cents(2000, 0));
        assert_eq!(suggestion.wants, Money::from_dollars_cents(1200, 0));
        assert_eq!(suggestion.savings, Money::from_dollars_cents(800, 0));

        let lookup = |name: &str| {
            suggestion
                .categories
                .iter()
                .find(|p| p.category == name)
                .map(|p| p.amount)
                .unwrap()
        };
        assert_eq!(lookup("Housing"), Money::from_dollars_cents(1200, 0));
        assert_eq!(lookup("Utilities"), Money::from_dollars_cents(200, 0));
        assert_eq!(lookup("Groceries"), Money::from_dollars_cents(400, 0));
        assert_eq!(lookup("Transportation"), Money::from_dollars_cents(200, 0));
        assert_eq!(lookup("Entertainment"), Money::from_dollars_cents(480, 0));
        assert_eq!(lookup("Dining Out"), Money::from_dollars_cents(360, 0));
        assert_eq!(lookup("Shopping"), Money::from_dollars_cents(360, 0));
        assert_eq!(lookup("Savings"), Money::from_dollars_cents(800, 0));
        assert_eq!(suggestion.categories.len(), 8);
    }

    #[test]
    fn test_zero_income_rejected() {
        let err = BudgetSuggestion::for_income(june(), Money::zero()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_suggest_saves_plan() {
        let (_temp_dir, storage) = create_test_storage();
        storage.ledger.push_income(
            Record::income(
                Money::from_dollars_cents(3000, 0),
                "Salary",
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            )
            .unwrap(),
        );

        let service = BudgetService::new(&storage);
        assert!(service.plan().is_empty());

        let suggestion = service.suggest(june()).unwrap();
        assert_eq!(suggestion.income, Money::from_dollars_cents(3000, 0));
        assert_eq!(service.plan(), suggestion.categories);
        assert_eq!(
            storage.ledger.get().planned("Savings"),
            Some(Money::from_dollars_cents(600, 0))
        );
    }

    #[test]
    fn test_suggest_without_income_leaves_plan() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service.suggest(june()).is_err());
        assert!(service.plan().is_empty());
    }

    #[test]
    fn test_format_terminal() {
        let suggestion =
            BudgetSuggestion::for_income(june(), Money::from_dollars_cents(4000, 0)).unwrap();
        let text = suggestion.format_terminal();
        assert!(text.contains("June 2024"));
        assert!(text.contains("Dining Out"));
        assert!(text.contains("$1,200.00"));
    }
}
