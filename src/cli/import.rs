//! CLI command handlers for CSV import and ledger restore

use std::fs;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::services::{ImportService, RecordService, RecordTarget};
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    file: &Path,
    user: Option<&str>,
) -> BudgetResult<()> {
    let result =
        ImportService::new(storage).import_file(file, RecordTarget::from_user(user))?;

    println!("Import Complete!");
    println!("  Imported:    {}", result.imported());
    println!("  Skipped:     {}", result.skipped.len());
    for skipped in &result.skipped {
        println!("    Line {}: {}", skipped.line, skipped.reason);
    }

    Ok(())
}

/// Replace the ledger with a JSON or YAML export, chosen by file extension
pub fn handle_restore_command(storage: &Storage, file: &Path, yes: bool) -> BudgetResult<()> {
    if !yes {
        return Err(BudgetError::Validation(
            "Refusing to replace the ledger without --yes".to_string(),
        ));
    }

    let extension = file
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let contents = fs::read_to_string(file).map_err(|e| {
        BudgetError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let export = match extension.as_deref() {
        Some("json") => import_from_json(&contents)?,
        Some("yaml" | "yml") => import_from_yaml(&contents)?,
        _ => {
            return Err(BudgetError::Validation(format!(
                "Can't tell the format of {}: expected .json, .yaml or .yml",
                file.display()
            )))
        }
    };

    let (income, expenses) = (export.income.len(), export.expenses.len());
    RecordService::new(storage).restore(export.into_ledger())?;

    println!("Ledger restored from: {}", file.display());
    println!("  Income:      {}", income);
    println!("  Expenses:    {}", expenses);
    Ok(())
}
