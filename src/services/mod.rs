//! Service layer for BudgetBuddy
//!
//! Pure aggregation, tax and identity logic, plus services that apply it
//! on top of the storage layer.

pub mod aggregate;
pub mod budget;
pub mod identity;
pub mod import;
pub mod records;
pub mod report;
pub mod tax;
pub mod user;

pub use budget::{BudgetService, BudgetSuggestion};
pub use identity::{IdGenerator, RandomIdGenerator};
pub use import::{ImportResult, ImportService};
pub use records::{RecordService, RecordTarget};
pub use report::ReportService;
pub use user::{NewUser, UserService};
