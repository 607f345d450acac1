//! Employee model and related types.
//!
//! This module defines the Employee struct and the Compensation enum that
//! distinguishes contractual staff from fixed-salary staff.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an employee is currently on the books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    Active,
    /// No longer employed; ledger history is retained.
    Inactive,
}

/// How an employee earns money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Compensation {
    /// Paid per unit of recorded work (quantity x price).
    Contractual,
    /// Paid a recurring monthly salary plus optional overtime.
    Fixed {
        /// The salary paid per monthly period.
        monthly_salary: Decimal,
    },
}

/// The two employee categories, without their compensation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// See [`Compensation::Contractual`].
    Contractual,
    /// See [`Compensation::Fixed`].
    Fixed,
}

impl Compensation {
    /// Returns the variant without its payload.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Compensation::Contractual => EmployeeKind::Contractual,
            Compensation::Fixed { .. } => EmployeeKind::Fixed,
        }
    }
}

/// Represents an employee whose pay is tracked in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Mobile number used for notifications.
    #[serde(default)]
    pub phone: Option<String>,
    /// Job title or role.
    #[serde(default)]
    pub role: Option<String>,
    /// The date the employee was hired.
    #[serde(deserialize_with = "crate::money::deserialize_record_date")]
    pub hire_date: NaiveDate,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Compensation basis.
    pub compensation: Compensation,
}

impl Employee {
    /// Returns the employee category.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Compensation, Employee, EmployeeKind, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_002".to_string(),
    ///     name: "Rosa Diaz".to_string(),
    ///     phone: None,
    ///     role: Some("Bookkeeper".to_string()),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ///     status: EmployeeStatus::Active,
    ///     compensation: Compensation::Fixed { monthly_salary: Decimal::new(5000, 0) },
    /// };
    /// assert_eq!(employee.kind(), EmployeeKind::Fixed);
    /// assert_eq!(employee.monthly_salary(), Some(Decimal::new(5000, 0)));
    /// ```
    pub fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    /// Returns the monthly salary for fixed employees.
    pub fn monthly_salary(&self) -> Option<Decimal> {
        match self.compensation {
            Compensation::Fixed { monthly_salary } => Some(monthly_salary),
            Compensation::Contractual => None,
        }
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
