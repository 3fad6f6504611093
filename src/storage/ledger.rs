//! Ledger repository
//!
//! Holds the income/expense ledger in memory and persists it as one JSON
//! document. Every save rewrites the whole file.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::BudgetError;
use crate::models::{Ledger, PlannedCategory, Record};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the income/expense ledger
pub struct LedgerRepository {
    path: PathBuf,
    ledger: RefCell<Ledger>,
}

impl LedgerRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ledger: RefCell::new(Ledger::default()),
        }
    }

    /// Load the ledger from disk; a missing file is an empty ledger
    pub fn load(&self) -> Result<(), BudgetError> {
        let ledger: Ledger = read_json(&self.path)?;
        *self.ledger.borrow_mut() = ledger;
        Ok(())
    }

    /// Save the ledger to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, &*self.ledger.borrow())
    }

    /// Snapshot of the whole ledger
    pub fn get(&self) -> Ledger {
        self.ledger.borrow().clone()
    }

    /// All income records
    pub fn income(&self) -> Vec<Record> {
        self.ledger.borrow().income.clone()
    }

    /// All expense records
    pub fn expenses(&self) -> Vec<Record> {
        self.ledger.borrow().expenses.clone()
    }

    /// The saved budget plan
    pub fn budget_plan(&self) -> Vec<PlannedCategory> {
        self.ledger.borrow().budget_categories.clone()
    }

    pub fn push_income(&self, record: Record) {
        self.ledger.borrow_mut().income.push(record);
    }

    /// Append several expenses at once
    pub fn extend_expenses(&self, records: impl IntoIterator<Item = Record>) {
        self.ledger.borrow_mut().expenses.extend(records);
    }

    /// Replace the budget plan
    pub fn set_budget_plan(&self, plan: Vec<PlannedCategory>) {
        self.ledger.borrow_mut().budget_categories = plan;
    }

    /// Swap in a whole ledger, e.g. one read back from an export
    pub fn replace(&self, ledger: Ledger) {
        *self.ledger.borrow_mut() = ledger;
    }

    /// Drop every record and the budget plan
    pub fn clear(&self) {
        *self.ledger.borrow_mut() = Ledger::default();
    }
}
