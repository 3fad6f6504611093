//! BudgetBuddy - command-line personal budget and expense tracker
//!
//! Records income and expenses, keeps per-user profiles, and reports on
//! spending by category and month, after-tax balances and 50/30/20 budget
//! suggestions. Everything is stored in flat JSON and CSV files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, ledger, users)
//! - `storage`: JSON/CSV file storage layer
//! - `services`: Aggregation, tax and identity logic plus the business services
//! - `reports`: Report builders and their terminal/JSON forms
//! - `export`: CSV, JSON and YAML exports
//! - `display`: Terminal tables and formatting helpers
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbuddy::config::{paths::BudgetPaths, settings::Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
