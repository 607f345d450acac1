//! Payroll reconciliation and balance engine.
//!
//! This crate tracks what contractual and fixed-salary employees have earned
//! and been paid, derives the balance owed in either direction over any date
//! range, and assembles statements and payslips from the result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod report;
pub mod store;
pub mod validation;
