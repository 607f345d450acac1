//! Ledger record models.
//!
//! The four record kinds kept against an employee. Each has a fixed field
//! set; records are only constructed through validation or decoded from the
//! store, never trusted as loose objects.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::money::deserialize_record_date;

use super::employee::EmployeeKind;

/// Anything that sits on a single calendar date in the ledger.
pub trait Dated {
    /// The calendar date the record belongs to.
    fn date(&self) -> NaiveDate;
}

/// A unit of paid work for a contractual employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee the work was done by.
    pub employee_id: String,
    /// The date the work was done.
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
    /// What was done.
    pub description: String,
    /// Number of units; `None` marks a lump-sum entry.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Price per unit, or the whole amount for a lump sum.
    pub price: Decimal,
    /// Stored line total.
    pub total: Decimal,
}

impl WorkRecord {
    /// Quantity with the lump-sum default of one applied.
    pub fn effective_quantity(&self) -> Decimal {
        self.quantity.unwrap_or(Decimal::ONE)
    }

    /// The line total derived from quantity and price.
    ///
    /// # Errors
    ///
    /// Returns `DataIntegrity` when the product does not fit in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::WorkRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let lump_sum = WorkRecord {
    ///     id: Uuid::nil(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
    ///     description: "Kitchen refit".to_string(),
    ///     quantity: None,
    ///     price: Decimal::new(750, 0),
    ///     total: Decimal::new(750, 0),
    /// };
    /// assert_eq!(lump_sum.line_total()?, Decimal::new(750, 0));
    /// # Ok::<(), payroll_ledger::error::LedgerError>(())
    /// ```
    pub fn line_total(&self) -> LedgerResult<Decimal> {
        match self.quantity {
            Some(quantity) => quantity
                .checked_mul(self.price)
                .ok_or_else(|| LedgerError::overflow("work record line total")),
            None => Ok(self.price),
        }
    }
}

impl Dated for WorkRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Overtime worked by a fixed-salary employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee who worked the overtime.
    pub employee_id: String,
    /// The date the overtime was worked.
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
    /// Reason or task.
    pub description: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Pay per overtime hour.
    pub rate: Decimal,
    /// Amount payable; totals use this stored value as-is.
    pub amount: Decimal,
}

impl Dated for OvertimeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Money paid to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPayment {
    /// Unique identifier for the payment.
    pub id: Uuid,
    /// The employee who was paid.
    pub employee_id: String,
    /// The date the payment was made.
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-form payment type (e.g. "bank transfer", "cash").
    #[serde(default)]
    pub payment_type: Option<String>,
    /// Work records this payment was meant to settle; not used in reconciliation.
    #[serde(default)]
    pub work_record_ids: Vec<Uuid>,
}

impl Dated for SalaryPayment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// An advance handed to an employee ahead of payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advance {
    /// Unique identifier for the advance.
    pub id: Uuid,
    /// The employee who received the advance.
    pub employee_id: String,
    /// The date the advance was given.
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
    /// Amount advanced.
    pub amount: Decimal,
    /// Why the advance was given.
    #[serde(default)]
    pub reason: Option<String>,
}

impl Dated for Advance {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The kind of a ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// See [`WorkRecord`].
    WorkRecord,
    /// See [`OvertimeRecord`].
    OvertimeRecord,
    /// See [`SalaryPayment`].
    SalaryPayment,
    /// See [`Advance`].
    Advance,
}

impl RecordKind {
    /// The snake_case name used in messages and wire data.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::WorkRecord => "work_record",
            RecordKind::OvertimeRecord => "overtime_record",
            RecordKind::SalaryPayment => "salary_payment",
            RecordKind::Advance => "advance",
        }
    }

    /// The employee category this record kind is restricted to, if any.
    pub fn required_employee_kind(&self) -> Option<EmployeeKind> {
        match self {
            RecordKind::WorkRecord => Some(EmployeeKind::Contractual),
            RecordKind::OvertimeRecord => Some(EmployeeKind::Fixed),
            RecordKind::SalaryPayment | RecordKind::Advance => None,
        }
    }
}

/// Any ledger record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerRecord {
    /// A contractual work entry.
    WorkRecord(WorkRecord),
    /// A fixed-salary overtime entry.
    OvertimeRecord(OvertimeRecord),
    /// A payment.
    SalaryPayment(SalaryPayment),
    /// An advance.
    Advance(Advance),
}

impl LedgerRecord {
    /// The record's id.
    pub fn id(&self) -> Uuid {
        match self {
            LedgerRecord::WorkRecord(r) => r.id,
            LedgerRecord::OvertimeRecord(r) => r.id,
            LedgerRecord::SalaryPayment(r) => r.id,
            LedgerRecord::Advance(r) => r.id,
        }
    }

    /// The employee the record belongs to.
    pub fn employee_id(&self) -> &str {
        match self {
            LedgerRecord::WorkRecord(r) => &r.employee_id,
            LedgerRecord::OvertimeRecord(r) => &r.employee_id,
            LedgerRecord::SalaryPayment(r) => &r.employee_id,
            LedgerRecord::Advance(r) => &r.employee_id,
        }
    }

    /// The record's kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            LedgerRecord::WorkRecord(_) => RecordKind::WorkRecord,
            LedgerRecord::OvertimeRecord(_) => RecordKind::OvertimeRecord,
            LedgerRecord::SalaryPayment(_) => RecordKind::SalaryPayment,
            LedgerRecord::Advance(_) => RecordKind::Advance,
        }
    }
}

impl Dated for LedgerRecord {
    fn date(&self) -> NaiveDate {
        match self {
            LedgerRecord::WorkRecord(r) => r.date,
            LedgerRecord::OvertimeRecord(r) => r.date,
            LedgerRecord::SalaryPayment(r) => r.date,
            LedgerRecord::Advance(r) => r.date,
        }
    }
}

/// Every record held for one employee, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLedger {
    /// Contractual work entries.
    #[serde(default)]
    pub work_records: Vec<WorkRecord>,
    /// Fixed-salary overtime entries.
    #[serde(default)]
    pub overtime_records: Vec<OvertimeRecord>,
    /// Payments made.
    #[serde(default)]
    pub salary_payments: Vec<SalaryPayment>,
    /// Advances given.
    #[serde(default)]
    pub advances: Vec<Advance>,
}

impl EmployeeLedger {
    /// Iterates over the employee id of every record in the ledger.
    pub fn employee_ids(&self) -> impl Iterator<Item = &str> {
        self.work_records
            .iter()
            .map(|r| r.employee_id.as_str())
            .chain(self.overtime_records.iter().map(|r| r.employee_id.as_str()))
            .chain(self.salary_payments.iter().map(|r| r.employee_id.as_str()))
            .chain(self.advances.iter().map(|r| r.employee_id.as_str()))
    }

    /// Total number of records held.
    pub fn len(&self) -> usize {
        self.work_records.len()
            + self.overtime_records.len()
            + self.salary_payments.len()
            + self.advances.len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
