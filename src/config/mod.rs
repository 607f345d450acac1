//! Configuration loading and management for the payroll ledger.
//!
//! This module loads organisation details, presentation formatting and
//! payroll policy from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Currency: {}", config.formatting().currency_code);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FormatConfig, LedgerConfig, OrganizationConfig, PayrollPolicy, PeriodStrategy, SymbolPosition,
};
