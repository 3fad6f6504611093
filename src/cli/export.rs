//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_ledger_json, export_ledger_yaml, export_records_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export records to CSV (date,description,amount,category)
    Csv {
        /// Output file path
        output: PathBuf,

        /// Export income instead of expenses
        #[arg(long)]
        income: bool,
    },

    /// Export the whole ledger to JSON
    Json {
        /// Output file path
        output: PathBuf,
    },

    /// Export the whole ledger to YAML
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> BudgetResult<()> {
    match cmd {
        ExportCommands::Csv { output, income } => {
            let records = if income {
                storage.ledger.income()
            } else {
                storage.ledger.expenses()
            };
            let mut writer = create_output(&output)?;
            let count = export_records_csv(&records, &mut writer)?;
            finish(writer)?;
            println!("Exported {} record(s) to: {}", count, output.display());
        }
        ExportCommands::Json { output } => {
            let mut writer = create_output(&output)?;
            export_ledger_json(&storage.ledger.get(), &mut writer)?;
            finish(writer)?;
            println!("Ledger exported to: {}", output.display());
        }
        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            export_ledger_yaml(&storage.ledger.get(), &mut writer)?;
            finish(writer)?;
            println!("Ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> BudgetResult<()> {
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to write export: {}", e)))
}
