//! CSV import service
//!
//! Imports expenses from a CSV file whose header row is exactly
//! `date,description,amount,category`. Rows that fail validation are
//! skipped and reported; one bad row never aborts the import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_date, Money, Record};
use crate::services::records::{RecordService, RecordTarget};
use crate::storage::Storage;

/// Column layout shared by CSV import and export
pub const RECORD_CSV_HEADER: [&str; 4] = ["date", "description", "amount", "category"];

/// A row that was not imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file, counting the header
    pub line: usize,
    pub reason: String,
}

/// Outcome of parsing or importing a CSV file
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Rows that passed validation, in file order
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

impl ImportResult {
    pub fn imported(&self) -> usize {
        self.records.len()
    }
}

/// Parse expense rows from CSV text
///
/// Fails only when the header is wrong or the input can't be read as CSV
/// at all; individual rows are validated and skipped.
pub fn parse_expenses<R: Read>(reader: R) -> BudgetResult<ImportResult> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| BudgetError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();
    check_header(&headers)?;

    let mut result = ImportResult::default();
    for (idx, row) in reader.records().enumerate() {
        let line = idx + 2;
        let parsed = row
            .map_err(|e| format!("Unreadable row: {}", e))
            .and_then(|row| parse_row(&row));

        match parsed {
            Ok(record) => result.records.push(record),
            Err(reason) => {
                warn!(line, reason = %reason, "skipping CSV row");
                result.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok(result)
}

fn check_header(headers: &StringRecord) -> BudgetResult<()> {
    if headers.iter().eq(RECORD_CSV_HEADER.iter().copied()) {
        Ok(())
    } else {
        Err(BudgetError::Import(format!(
            "Expected header '{}', found '{}'",
            RECORD_CSV_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )))
    }
}

fn parse_row(row: &StringRecord) -> Result<Record, String> {
    let field = |i: usize| {
        row.get(i)
            .ok_or_else(|| format!("Missing '{}' column", RECORD_CSV_HEADER[i]))
    };

    let date = parse_date(field(0)?).map_err(|e| e.to_string())?;
    let description = field(1)?;
    let amount = Money::parse(field(2)?).map_err(|e| e.to_string())?;
    let category = field(3)?;

    Record::expense(amount, category, description, date).map_err(|e| e.to_string())
}

/// Service for importing expenses from files
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a CSV file, saving the valid rows to `target`
    pub fn import_file(&self, path: &Path, target: RecordTarget<'_>) -> BudgetResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            BudgetError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let result = parse_expenses(file)?;
        if !result.records.is_empty() {
            RecordService::new(self.storage).add_expenses(target, result.records.clone())?;
        }

        info!(
            file = %path.display(),
            imported = result.imported(),
            skipped = result.skipped.len(),
            "imported expenses"
        );
        Ok(result)
    }
}
