//! Display formatting for terminal output
//!
//! Tables for records and users, plus the shared helpers the report
//! formatters use.

pub mod records;
pub mod report;
pub mod users;

pub use records::format_record_table;
pub use users::{format_user_details, format_user_list};
