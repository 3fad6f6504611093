//! CSV Export functionality
//!
//! Writes records in the same `date,description,amount,category` layout
//! the importer reads, so an exported file can be imported again.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Record;
use crate::services::import::RECORD_CSV_HEADER;

/// Export records to CSV, returning how many rows were written
pub fn export_records_csv<W: Write>(records: &[Record], writer: W) -> BudgetResult<usize> {
    let to_export_err = |e: ::csv::Error| BudgetError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(RECORD_CSV_HEADER)
        .map_err(to_export_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.description.clone(),
                record.amount.to_decimal_string(),
                record.category.clone(),
            ])
            .map_err(to_export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(records.len())
}
