//! Configuration module for BudgetBuddy
//!
//! This module provides configuration management including:
//! - Data directory path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
