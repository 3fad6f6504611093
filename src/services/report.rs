//! Report service
//!
//! Loads what each report needs from storage and hands it to the pure
//! report builders.

use std::path::PathBuf;

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthYear;
use crate::reports::{
    BudgetReport, FinancialSummary, HistoryReport, MonthlyReport, SavingsForecast,
};
use crate::services::user::UserService;
use crate::storage::Storage;

pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Budget analysis of one user's month, from their profile
    pub fn analyze(&self, username: &str, period: MonthYear) -> BudgetResult<BudgetReport> {
        let profile = UserService::new(self.storage)
            .profile(username)?
            .ok_or_else(|| BudgetError::NotFound {
                entity_type: "Profile",
                identifier: username.trim().to_string(),
            })?;

        BudgetReport::generate(
            &profile.username,
            period,
            profile.income,
            profile.tax_rate,
            &profile.transactions,
        )
    }

    /// Write the analysis to the reports directory
    pub fn export_monthly(&self, report: &BudgetReport) -> BudgetResult<(MonthlyReport, PathBuf)> {
        let monthly = MonthlyReport::from_analysis(report);
        let path = self.storage.reports.save(&monthly)?;
        info!(username = %monthly.username, file = %path.display(), "exported monthly report");
        Ok((monthly, path))
    }

    /// Ledger summary for a month
    pub fn summary(&self, period: MonthYear) -> FinancialSummary {
        FinancialSummary::generate(&self.storage.ledger.get(), period)
    }

    /// Month-by-month ledger history
    pub fn history(&self) -> HistoryReport {
        HistoryReport::generate(&self.storage.ledger.get())
    }

    /// Projected ledger savings over the next `months`
    pub fn forecast(&self, months: u32) -> SavingsForecast {
        SavingsForecast::generate(&self.storage.ledger.get(), months)
    }
}
