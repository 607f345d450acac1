//! Core data models for the payroll ledger.
//!
//! This module contains the employee variants, the four ledger record
//! kinds, date ranges and the derived summary types.

mod date_range;
mod employee;
mod records;
mod summary;

pub use date_range::DateRange;
pub use employee::{Compensation, Employee, EmployeeKind, EmployeeStatus};
pub use records::{
    Advance, Dated, EmployeeLedger, LedgerRecord, OvertimeRecord, RecordKind, SalaryPayment,
    WorkRecord,
};
pub use summary::{AuditStep, BalanceStatus, ReportSummary};
