//! Configuration loading and management for the attendance engine.
//!
//! This module provides the business rules thresholds that govern break
//! deduction and overtime, and the loader that reads them from a YAML file.
//! No other module embeds a numeric threshold directly; every duration
//! decision routes through [`BusinessRules`] so thresholds stay auditable
//! and testable in isolation.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rules.yaml").unwrap();
//! println!("Break deduction: {} minutes", config.rules().break_deduction_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BusinessRules, RulesFile};
