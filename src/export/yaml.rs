//! YAML Export functionality
//!
//! Exports the ledger to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::LedgerExport;
use crate::models::Ledger;

/// Export the ledger to YAML
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let to_export_err = |e: std::io::Error| BudgetError::Export(e.to_string());
    writeln!(writer, "# BudgetBuddy Ledger Export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> BudgetResult<LedgerExport> {
    serde_yaml::from_str(yaml_str).map_err(|e| BudgetError::Import(e.to_string()))
}
