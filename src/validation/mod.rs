//! Boundary validation for raw ledger input.
//!
//! Raw inputs arrive from forms or API calls with every field optional and
//! typed as text or number. Validators in this module are the only way to
//! turn them into ledger records, and they reject rather than coerce.

mod fields;
mod records;

pub use fields::FieldValue;
pub use records::{
    AdvanceInput, EmployeeInput, OvertimeRecordInput, SalaryPaymentInput, WorkRecordInput,
    validate_advance, validate_employee, validate_overtime_record, validate_salary_payment,
    validate_work_record,
};
