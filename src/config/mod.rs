//! Configuration loading for the Payroll Engine.
//!
//! This module provides functionality to load a statutory rules snapshot
//! from a YAML file, including PAYE brackets, contribution rates, and the
//! snapshot's lifecycle dates.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RulesLoader;
//!
//! let rules = RulesLoader::load("./config/rules/kenya_2025.yaml").unwrap();
//! println!("Personal relief: {}", rules.personal_relief());
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::RulesConfig;
