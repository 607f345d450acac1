//! Record validators.
//!
//! Each validator turns a raw input into a typed record or fails with the
//! first offending field. Nothing is coerced: a blank price is an error, not
//! a zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Advance, Compensation, Employee, EmployeeKind, EmployeeStatus, OvertimeRecord, RecordKind,
    SalaryPayment, WorkRecord,
};

use super::fields::{
    FieldValue, optional_amount, optional_text, required_amount, required_date, required_text,
};

/// Raw input for a contractual work entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkRecordInput {
    /// Date of the work.
    #[serde(default)]
    pub date: Option<FieldValue>,
    /// What was done.
    #[serde(default)]
    pub description: Option<FieldValue>,
    /// Units of work; blank for a lump sum.
    #[serde(default)]
    pub quantity: Option<FieldValue>,
    /// Price per unit, or the lump sum.
    #[serde(default)]
    pub price: Option<FieldValue>,
}

/// Raw input for a fixed-salary overtime entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OvertimeRecordInput {
    /// Date of the overtime.
    #[serde(default)]
    pub date: Option<FieldValue>,
    /// Reason or task.
    #[serde(default)]
    pub description: Option<FieldValue>,
    /// Hours worked; blank counts as one.
    #[serde(default)]
    pub hours: Option<FieldValue>,
    /// Pay per hour.
    #[serde(default)]
    pub rate: Option<FieldValue>,
}

/// Raw input for a salary payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryPaymentInput {
    /// Date paid.
    #[serde(default)]
    pub date: Option<FieldValue>,
    /// Amount paid.
    #[serde(default)]
    pub amount: Option<FieldValue>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<FieldValue>,
    /// Free-form payment type.
    #[serde(default)]
    pub payment_type: Option<FieldValue>,
    /// Work records the payment is meant to settle.
    #[serde(default)]
    pub work_record_ids: Vec<Uuid>,
}

/// Raw input for an advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvanceInput {
    /// Date given.
    #[serde(default)]
    pub date: Option<FieldValue>,
    /// Amount advanced.
    #[serde(default)]
    pub amount: Option<FieldValue>,
    /// Why it was given.
    #[serde(default)]
    pub reason: Option<FieldValue>,
}

/// Raw input for adding or editing an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Full name.
    #[serde(default)]
    pub name: Option<FieldValue>,
    /// Mobile number.
    #[serde(default)]
    pub phone: Option<FieldValue>,
    /// Job title.
    #[serde(default)]
    pub role: Option<FieldValue>,
    /// Hire date.
    #[serde(default)]
    pub hire_date: Option<FieldValue>,
    /// Employment status; defaults to active.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    /// Contractual or fixed.
    pub kind: EmployeeKind,
    /// Monthly salary, required for fixed employees only.
    #[serde(default)]
    pub monthly_salary: Option<FieldValue>,
}

/// `factor * rate`, failing on `field` when the product does not fit in a
/// `Decimal`.
fn checked_product(
    record: &str,
    field: &str,
    factor: Decimal,
    rate: Decimal,
) -> LedgerResult<Decimal> {
    factor
        .checked_mul(rate)
        .ok_or_else(|| LedgerError::InvalidNumber {
            record: record.to_string(),
            field: field.to_string(),
            message: "line total is too large to represent".to_string(),
        })
}

/// Validates a work entry for `employee_id`.
///
/// When `quantity` is blank the entry is a lump sum and its total equals the
/// price.
///
/// # Examples
///
/// ```
/// use payroll_ledger::validation::{WorkRecordInput, validate_work_record};
/// use rust_decimal::Decimal;
///
/// let input = WorkRecordInput {
///     date: Some("2025-09-15".into()),
///     description: Some("Kitchen refit".into()),
///     quantity: None,
///     price: Some("750".into()),
/// };
/// let record = validate_work_record("emp_001", &input)?;
/// assert_eq!(record.total, Decimal::new(750, 0));
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
pub fn validate_work_record(employee_id: &str, input: &WorkRecordInput) -> LedgerResult<WorkRecord> {
    let record = RecordKind::WorkRecord.as_str();

    let description = required_text(record, "description", &input.description)?;
    let price = required_amount(record, "price", &input.price)?;
    let quantity = optional_amount(record, "quantity", &input.quantity)?;
    let date = required_date(record, "date", &input.date)?;

    let total = match quantity {
        Some(quantity) => checked_product(record, "quantity", quantity, price)?,
        None => price,
    };

    Ok(WorkRecord {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        date,
        description,
        quantity,
        price,
        total,
    })
}

/// Validates an overtime entry for `employee_id`; the amount is hours x rate.
pub fn validate_overtime_record(
    employee_id: &str,
    input: &OvertimeRecordInput,
) -> LedgerResult<OvertimeRecord> {
    let record = RecordKind::OvertimeRecord.as_str();

    let description = required_text(record, "description", &input.description)?;
    let rate = required_amount(record, "rate", &input.rate)?;
    let hours = optional_amount(record, "hours", &input.hours)?.unwrap_or(Decimal::ONE);
    let date = required_date(record, "date", &input.date)?;
    let amount = checked_product(record, "hours", hours, rate)?;

    Ok(OvertimeRecord {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        date,
        description,
        hours,
        rate,
        amount,
    })
}

/// Validates a salary payment for `employee_id`.
pub fn validate_salary_payment(
    employee_id: &str,
    input: &SalaryPaymentInput,
) -> LedgerResult<SalaryPayment> {
    let record = RecordKind::SalaryPayment.as_str();

    let amount = required_amount(record, "amount", &input.amount)?;
    let date = required_date(record, "date", &input.date)?;

    Ok(SalaryPayment {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        date,
        amount,
        notes: optional_text(&input.notes),
        payment_type: optional_text(&input.payment_type),
        work_record_ids: input.work_record_ids.clone(),
    })
}

/// Validates an advance for `employee_id`.
pub fn validate_advance(employee_id: &str, input: &AdvanceInput) -> LedgerResult<Advance> {
    let record = RecordKind::Advance.as_str();

    let amount = required_amount(record, "amount", &input.amount)?;
    let date = required_date(record, "date", &input.date)?;

    Ok(Advance {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        date,
        amount,
        reason: optional_text(&input.reason),
    })
}

/// Validates an employee record under the given id.
pub fn validate_employee(id: &str, input: &EmployeeInput) -> LedgerResult<Employee> {
    let record = "employee";

    let name = required_text(record, "name", &input.name)?;
    let hire_date = required_date(record, "hire_date", &input.hire_date)?;

    let compensation = match input.kind {
        EmployeeKind::Fixed => Compensation::Fixed {
            monthly_salary: required_amount(record, "monthly_salary", &input.monthly_salary)?,
        },
        EmployeeKind::Contractual => {
            if optional_text(&input.monthly_salary).is_some() {
                return Err(LedgerError::InvalidNumber {
                    record: record.to_string(),
                    field: "monthly_salary".to_string(),
                    message: "contractual employees have no fixed salary".to_string(),
                });
            }
            Compensation::Contractual
        }
    };

    Ok(Employee {
        id: id.to_string(),
        name,
        phone: optional_text(&input.phone),
        role: optional_text(&input.role),
        hire_date,
        status: input.status.unwrap_or_default(),
        compensation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn work_input(quantity: Option<&str>, price: Option<&str>) -> WorkRecordInput {
        WorkRecordInput {
            date: Some("2025-09-15".into()),
            description: Some("Framing".into()),
            quantity: quantity.map(Into::into),
            price: price.map(Into::into),
        }
    }

    #[test]
    fn test_work_record_total_is_quantity_times_price() {
        let record = validate_work_record("emp_001", &work_input(Some("40"), Some("50"))).unwrap();
        assert_eq!(record.total, dec("2000"));
        assert_eq!(record.quantity, Some(dec("40")));
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
    }

    #[test]
    fn test_work_record_total_too_large_is_rejected_on_quantity() {
        let input = work_input(Some("79228162514264337593543950335"), Some("2"));
        match validate_work_record("emp_001", &input) {
            Err(LedgerError::InvalidNumber { field, .. }) => assert_eq!(field, "quantity"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_overtime_amount_too_large_is_rejected_on_hours() {
        let input = OvertimeRecordInput {
            date: Some("2025-09-20".into()),
            description: Some("Stocktake".into()),
            hours: Some("79228162514264337593543950335".into()),
            rate: Some("1.5".into()),
        };
        let err = validate_overtime_record("emp_002", &input).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidNumber { .. }));
        assert_eq!(err.field(), Some("hours"));
    }

    #[test]
    fn test_work_record_lump_sum_total_equals_price() {
        let record = validate_work_record("emp_001", &work_input(None, Some("750"))).unwrap();
        assert_eq!(record.total, dec("750"));
        assert_eq!(record.quantity, None);

        let blank = validate_work_record("emp_001", &work_input(Some(""), Some("750"))).unwrap();
        assert_eq!(blank.total, dec("750"));
    }

    #[test]
    fn test_work_record_blank_price_blocks_write() {
        match validate_work_record("emp_001", &work_input(Some("3"), Some(" "))) {
            Err(LedgerError::MissingField { record, field }) => {
                assert_eq!(record, "work_record");
                assert_eq!(field, "price");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_work_record_missing_description() {
        let mut input = work_input(None, Some("100"));
        input.description = None;
        let err = validate_work_record("emp_001", &input).unwrap_err();
        assert_eq!(err.field(), Some("description"));
    }

    #[test]
    fn test_work_record_invalid_date() {
        let mut input = work_input(None, Some("100"));
        input.date = Some("2025-09-31".into());
        assert!(matches!(
            validate_work_record("emp_001", &input),
            Err(LedgerError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_work_record_negative_quantity_rejected() {
        assert!(matches!(
            validate_work_record("emp_001", &work_input(Some("-1"), Some("100"))),
            Err(LedgerError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_overtime_amount_is_hours_times_rate() {
        let input = OvertimeRecordInput {
            date: Some("2025-09-20".into()),
            description: Some("Stocktake".into()),
            hours: Some("6".into()),
            rate: Some("35".into()),
        };
        let record = validate_overtime_record("emp_002", &input).unwrap();
        assert_eq!(record.amount, dec("210"));
    }

    #[test]
    fn test_overtime_without_hours_counts_one_hour() {
        let input = OvertimeRecordInput {
            date: Some("2025-09-20".into()),
            description: Some("Call-out".into()),
            hours: None,
            rate: Some("80".into()),
        };
        let record = validate_overtime_record("emp_002", &input).unwrap();
        assert_eq!(record.hours, Decimal::ONE);
        assert_eq!(record.amount, dec("80"));
    }

    #[test]
    fn test_overtime_missing_rate() {
        let input = OvertimeRecordInput {
            date: Some("2025-09-20".into()),
            description: Some("Stocktake".into()),
            hours: Some("2".into()),
            rate: None,
        };
        let err = validate_overtime_record("emp_002", &input).unwrap_err();
        assert_eq!(err.field(), Some("rate"));
    }

    #[test]
    fn test_salary_payment_from_json() {
        let json = r#"{
            "date": "2025-09-16",
            "amount": 1500,
            "notes": "",
            "payment_type": "bank transfer"
        }"#;
        let input: SalaryPaymentInput = serde_json::from_str(json).unwrap();
        let payment = validate_salary_payment("emp_001", &input).unwrap();
        assert_eq!(payment.amount, dec("1500"));
        assert_eq!(payment.notes, None);
        assert_eq!(payment.payment_type.as_deref(), Some("bank transfer"));
        assert!(payment.work_record_ids.is_empty());
    }

    #[test]
    fn test_salary_payment_blank_amount_blocks_write() {
        let input = SalaryPaymentInput {
            date: Some("2025-09-16".into()),
            amount: Some("".into()),
            ..Default::default()
        };
        let err = validate_salary_payment("emp_001", &input).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.field(), Some("amount"));
    }

    #[test]
    fn test_advance_validation() {
        let input = AdvanceInput {
            date: Some("2025-09-03".into()),
            amount: Some("200".into()),
            reason: Some("Tools".into()),
        };
        let advance = validate_advance("emp_001", &input).unwrap();
        assert_eq!(advance.amount, dec("200"));
        assert_eq!(advance.reason.as_deref(), Some("Tools"));
    }

    #[test]
    fn test_fixed_employee_requires_salary() {
        let input = EmployeeInput {
            name: Some("Rosa Diaz".into()),
            phone: None,
            role: None,
            hire_date: Some("2024-02-01".into()),
            status: None,
            kind: EmployeeKind::Fixed,
            monthly_salary: None,
        };
        let err = validate_employee("emp_002", &input).unwrap_err();
        assert_eq!(err.field(), Some("monthly_salary"));
    }

    #[test]
    fn test_fixed_employee_validation() {
        let input = EmployeeInput {
            name: Some("Rosa Diaz".into()),
            phone: Some("+15550101".into()),
            role: Some("Bookkeeper".into()),
            hire_date: Some("2024-02-01".into()),
            status: None,
            kind: EmployeeKind::Fixed,
            monthly_salary: Some("5000".into()),
        };
        let employee = validate_employee("emp_002", &input).unwrap();
        assert_eq!(employee.monthly_salary(), Some(dec("5000")));
        assert_eq!(employee.status, EmployeeStatus::Active);
    }

    #[test]
    fn test_contractual_employee_rejects_salary() {
        let input = EmployeeInput {
            name: Some("Sam Okafor".into()),
            phone: None,
            role: None,
            hire_date: Some("2023-06-01".into()),
            status: Some(EmployeeStatus::Inactive),
            kind: EmployeeKind::Contractual,
            monthly_salary: Some("100".into()),
        };
        assert!(validate_employee("emp_001", &input).is_err());
    }
}
