//! Record service
//!
//! Adds and lists income and expense records. Expenses go either to the
//! shared ledger or to one user's profile.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, Money, MonthYear, Record, RecordKind, UserProfile};
use crate::storage::Storage;

/// Where expense records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTarget<'t> {
    /// The shared income/expense ledger
    Ledger,
    /// A user's profile, by username
    Profile(&'t str),
}

impl<'t> RecordTarget<'t> {
    pub fn from_user(username: Option<&'t str>) -> Self {
        match username {
            Some(name) => Self::Profile(name),
            None => Self::Ledger,
        }
    }
}

/// Service for income and expense records
pub struct RecordService<'a> {
    storage: &'a Storage,
}

impl<'a> RecordService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record income in the ledger
    pub fn add_income(
        &self,
        amount: Money,
        source: &str,
        date: NaiveDate,
    ) -> BudgetResult<Record> {
        let record = Record::income(amount, source, date)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.ledger.push_income(record.clone());
        self.storage.ledger.save()?;
        info!(amount = %record.amount, source = %record.category, "added income");
        Ok(record)
    }

    /// Record a single expense
    pub fn add_expense(
        &self,
        target: RecordTarget<'_>,
        amount: Money,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> BudgetResult<Record> {
        let record = Record::expense(amount, category, description, date)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.add_expenses(target, vec![record.clone()])?;
        Ok(record)
    }

    /// Append already-validated expenses and persist them in one write
    pub fn add_expenses(&self, target: RecordTarget<'_>, records: Vec<Record>) -> BudgetResult<()> {
        let count = records.len();
        match target {
            RecordTarget::Ledger => {
                self.storage.ledger.extend_expenses(records);
                self.storage.ledger.save()?;
            }
            RecordTarget::Profile(username) => {
                let mut profile = self.profile(username)?;
                profile.transactions.extend(records);
                profile.touch();
                self.storage.profiles.save(&profile)?;
            }
        }
        info!(count, ?target, "added expenses");
        Ok(())
    }

    /// Income records, optionally limited to one month
    pub fn list_income(&self, period: Option<MonthYear>) -> Vec<Record> {
        filter_period(self.storage.ledger.income(), period)
    }

    /// Expense records, optionally limited to one month
    pub fn list_expenses(
        &self,
        target: RecordTarget<'_>,
        period: Option<MonthYear>,
    ) -> BudgetResult<Vec<Record>> {
        let records = match target {
            RecordTarget::Ledger => self.storage.ledger.expenses(),
            RecordTarget::Profile(username) => self.profile(username)?.transactions,
        };
        Ok(filter_period(records, period))
    }

    /// Drop every ledger record and the saved budget plan
    pub fn clear(&self) -> BudgetResult<()> {
        self.storage.ledger.clear();
        self.storage.ledger.save()?;
        info!("cleared ledger");
        Ok(())
    }

    /// Replace the whole ledger, e.g. with one read back from an export
    ///
    /// Every record is validated first; nothing changes if one fails.
    pub fn restore(&self, ledger: Ledger) -> BudgetResult<()> {
        let checks = ledger
            .income
            .iter()
            .map(|r| (r, RecordKind::Income))
            .chain(ledger.expenses.iter().map(|r| (r, RecordKind::Expense)));
        for (record, kind) in checks {
            record.validate(kind).map_err(|e| {
                BudgetError::Import(format!("{} on {}: {}", kind, record.date, e))
            })?;
        }

        let (income, expenses) = (ledger.income.len(), ledger.expenses.len());
        self.storage.ledger.replace(ledger);
        self.storage.ledger.save()?;
        info!(income, expenses, "restored ledger");
        Ok(())
    }

    fn profile(&self, username: &str) -> BudgetResult<UserProfile> {
        let user = self
            .storage
            .users
            .find(username)
            .ok_or_else(|| BudgetError::user_not_found(username))?;

        self.storage
            .profiles
            .load(&user.username)?
            .ok_or_else(|| BudgetError::NotFound {
                entity_type: "Profile",
                identifier: user.username,
            })
    }
}

fn filter_period(records: Vec<Record>, period: Option<MonthYear>) -> Vec<Record> {
    match period {
        Some(p) => records.into_iter().filter(|r| p.contains(r.date)).collect(),
        None => records,
    }
}
