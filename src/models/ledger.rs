//! The ledger: every income and expense record plus the saved budget plan
//!
//! This is the in-memory record store. It is loaded whole from disk and
//! written back whole after each change.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::record::Record;

/// A planned monthly amount for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCategory {
    pub category: String,
    pub amount: Money,
}

impl PlannedCategory {
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// All income, expenses and the current budget plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<Record>,

    #[serde(default)]
    pub expenses: Vec<Record>,

    /// Budget plan in display order; empty until a suggestion is saved
    #[serde(default)]
    pub budget_categories: Vec<PlannedCategory>,
}

impl Ledger {
    /// Check if the ledger holds nothing at all
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty() && self.budget_categories.is_empty()
    }

    /// Look up the planned amount for a category
    pub fn planned(&self, category: &str) -> Option<Money> {
        self.budget_categories
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.amount)
    }
}
