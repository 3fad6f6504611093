//! Exported monthly reports
//!
//! Reports land in `reports/<username>_report_<YYYY>_<MM>.json`; exporting
//! the same month again overwrites the earlier file.

use std::path::PathBuf;

use crate::error::BudgetError;
use crate::models::MonthYear;
use crate::reports::MonthlyReport;

use super::file_io::{read_json_optional, write_json_atomic};

/// Repository for exported report files
pub struct ReportRepository {
    dir: PathBuf,
}

impl ReportRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, username: &str, period: MonthYear) -> PathBuf {
        self.dir.join(format!(
            "{}_report_{}_{:02}.json",
            username, period.year, period.month
        ))
    }

    /// Write a report, returning the file it was written to
    pub fn save(&self, report: &MonthlyReport) -> Result<PathBuf, BudgetError> {
        let path = self.path_for(&report.username, report.period());
        write_json_atomic(&path, report)
            .map_err(|e| BudgetError::Export(format!("Failed to export report: {}", e)))?;
        Ok(path)
    }

    /// Read a previously exported report
    pub fn load(
        &self,
        username: &str,
        period: MonthYear,
    ) -> Result<Option<MonthlyReport>, BudgetError> {
        read_json_optional(self.path_for(username, period))
    }
}
