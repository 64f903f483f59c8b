//! Configuration loading and management for the payroll engine.
//!
//! This module loads fiscal-year parameters (minimum wage, contribution
//! rates, personal deduction table, untaxed relief) and currency settings
//! from YAML files. Each fiscal year is an explicit value that is passed into
//! the payroll functions, so several years can coexist.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ro").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CurrencyConfig, FiscalYearConfig, JurisdictionMetadata, PayrollConfig,
    PersonalDeductionConfig, Rates, ReliefConfig,
};
