//! Core data models for BudgetBuddy
//!
//! This module contains the data structures of the budgeting domain:
//! records, the ledger, users, periods and money.

pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod record;
pub mod state;
pub mod user;

pub use ids::UserId;
pub use ledger::{Ledger, PlannedCategory};
pub use money::Money;
pub use period::MonthYear;
pub use record::{parse_date, Record, RecordKind, RecordValidationError};
pub use state::{normalize_state, US_STATES};
pub use user::{User, UserProfile, UserValidationError};
