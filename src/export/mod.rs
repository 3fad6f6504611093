//! Export module for BudgetBuddy
//!
//! Exports ledger data in multiple formats:
//! - CSV: records in the importer's column layout
//! - JSON: the whole ledger with schema version and metadata
//! - YAML: the same document in a human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_ledger_json, import_from_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_ledger_yaml, import_from_yaml};
