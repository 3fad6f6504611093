//! JSON Export functionality
//!
//! Exports the whole ledger to JSON with a schema version and summary
//! metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, PlannedCategory, Record};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub income: Vec<Record>,
    pub expenses: Vec<Record>,
    pub budget_categories: Vec<PlannedCategory>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,

    /// Earliest record date, income or expense
    pub earliest_record: Option<String>,

    /// Latest record date, income or expense
    pub latest_record: Option<String>,
}

impl LedgerExport {
    /// Snapshot a ledger for export
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let dates = || ledger.income.iter().chain(&ledger.expenses).map(|r| r.date);

        let metadata = ExportMetadata {
            income_count: ledger.income.len(),
            expense_count: ledger.expenses.len(),
            earliest_record: dates().min().map(|d| d.to_string()),
            latest_record: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            income: ledger.income.clone(),
            expenses: ledger.expenses.clone(),
            budget_categories: ledger.budget_categories.clone(),
            metadata,
        }
    }

    /// The ledger this export was taken from
    pub fn into_ledger(self) -> Ledger {
        Ledger {
            income: self.income,
            expenses: self.expenses,
            budget_categories: self.budget_categories,
        }
    }
}

/// Export the ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> BudgetResult<LedgerExport> {
    serde_json::from_str(json_str).map_err(|e| BudgetError::Import(e.to_string()))
}
