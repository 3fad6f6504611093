//! Reports module for BudgetBuddy
//!
//! Per-user budget analysis and its exportable form, the monthly financial
//! summary, the month-by-month history and the savings forecast.

pub mod analysis;
pub mod forecast;
pub mod history;
pub mod monthly;
pub mod summary;

pub use analysis::BudgetReport;
pub use forecast::{SavingsForecast, DEFAULT_FORECAST_MONTHS};
pub use history::HistoryReport;
pub use monthly::MonthlyReport;
pub use summary::{BudgetComparison, CategorySpending, FinancialSummary};
