//! Balance computation for contractual and fixed employees.
//!
//! These functions are pure: they read the records they are handed, never
//! consult a clock, and return identical results for identical inputs.
//! Each computation records an audit trail of the steps it applied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PeriodStrategy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AuditStep, DateRange, Employee, EmployeeKind, EmployeeLedger, OvertimeRecord, ReportSummary,
    SalaryPayment, WorkRecord,
};

use super::filter::filter_by_date_range;
use super::periods::period_counter;
use super::totals::{sum_advances, sum_overtime, sum_payments, sum_work};

/// How the earned figure was made up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EarningsBreakdown {
    /// Work record total (contractual employees).
    pub work_total: Decimal,
    /// Overtime total (fixed employees).
    pub overtime_total: Decimal,
    /// Monthly salary times period count (fixed employees).
    pub salary_total: Decimal,
    /// Monthly periods counted (fixed employees).
    pub period_count: u32,
    /// Advances given in the range; informational only.
    pub advances_total: Decimal,
}

/// The result of a summary computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// Earned, paid and balance.
    pub summary: ReportSummary,
    /// What the earned figure is made of.
    pub breakdown: EarningsBreakdown,
    /// The steps applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Numbers audit steps as they are recorded.
#[derive(Debug, Default)]
struct AuditTrail {
    steps: Vec<AuditStep>,
}

impl AuditTrail {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn record_range(&mut self, range: &DateRange) {
        self.record(
            "date_range",
            "Date Range",
            serde_json::json!({
                "start": range.start.map(|d| d.to_string()),
                "end": range.end.map(|d| d.to_string())
            }),
            serde_json::json!({ "valid": true }),
            match (range.start, range.end) {
                (None, None) => "No bounds; every record is included".to_string(),
                (start, end) => format!(
                    "Including records dated {} to {}",
                    start.map_or("the beginning".to_string(), |d| d.to_string()),
                    end.map_or("the latest record".to_string(), |d| d.to_string())
                ),
            },
        );
    }

    fn record_payments(&mut self, total_records: usize, included: usize, paid: Decimal) {
        self.record(
            "sum_payments",
            "Sum Salary Payments",
            serde_json::json!({ "records": total_records, "included": included }),
            serde_json::json!({ "paid": paid.to_string() }),
            format!("{} of {} payments in range total {}", included, total_records, paid),
        );
    }

    fn record_balance(&mut self, summary: &ReportSummary) {
        self.record(
            "balance",
            "Balance",
            serde_json::json!({
                "earned": summary.earned.to_string(),
                "paid": summary.paid.to_string()
            }),
            serde_json::json!({
                "balance": summary.balance.to_string(),
                "is_negative_balance": summary.is_negative_balance
            }),
            format!(
                "{} earned - {} paid = {}",
                summary.earned, summary.paid, summary.balance
            ),
        );
    }
}

/// Computes earned, paid and balance for a contractual employee.
///
/// `earned` is the work total and `paid` the payment total, both over the
/// records inside `range`.
///
/// # Errors
///
/// Returns `InvalidRange` when the range start is after its end, and
/// `DataIntegrity` when a total does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::compute_contractual_summary;
/// use payroll_ledger::models::DateRange;
///
/// let result = compute_contractual_summary(&[], &[], &DateRange::unbounded())?;
/// assert!(result.summary.balance.is_zero());
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
pub fn compute_contractual_summary(
    work_records: &[WorkRecord],
    payments: &[SalaryPayment],
    range: &DateRange,
) -> LedgerResult<SummaryResult> {
    let mut trail = AuditTrail::default();

    let work_in_range = filter_by_date_range(work_records, range)?;
    let payments_in_range = filter_by_date_range(payments, range)?;
    trail.record_range(range);

    let earned = sum_work(work_in_range.iter().copied())?;
    trail.record(
        "sum_work",
        "Sum Work Records",
        serde_json::json!({
            "records": work_records.len(),
            "included": work_in_range.len()
        }),
        serde_json::json!({ "earned": earned.to_string() }),
        format!(
            "{} of {} work records in range total {} (quantity x price, lump sums at price)",
            work_in_range.len(),
            work_records.len(),
            earned
        ),
    );

    let paid = sum_payments(payments_in_range.iter().copied())?;
    trail.record_payments(payments.len(), payments_in_range.len(), paid);

    let summary = ReportSummary::new(earned, paid)?;
    trail.record_balance(&summary);

    Ok(SummaryResult {
        summary,
        breakdown: EarningsBreakdown {
            work_total: earned,
            ..EarningsBreakdown::default()
        },
        audit_steps: trail.steps,
    })
}

/// Computes earned, paid and balance for a fixed-salary employee.
///
/// `earned` is the monthly salary times the number of periods in the range,
/// plus overtime in range. An open start resolves to the employee's hire
/// date and an open end to `as_of`; both only affect the period count.
///
/// # Errors
///
/// Returns `InvalidRange` for an inverted range, `EmployeeMismatch` when
/// the employee is not on a fixed salary, and `DataIntegrity` when a total
/// does not fit in a `Decimal`.
pub fn compute_fixed_summary<F>(
    employee: &Employee,
    overtime_records: &[OvertimeRecord],
    payments: &[SalaryPayment],
    range: &DateRange,
    as_of: NaiveDate,
    period_count: F,
) -> LedgerResult<SummaryResult>
where
    F: Fn(NaiveDate, NaiveDate) -> u32,
{
    let monthly_salary =
        employee
            .monthly_salary()
            .ok_or_else(|| LedgerError::EmployeeMismatch {
                employee_id: employee.id.clone(),
                message: "fixed summary requested for a contractual employee".to_string(),
            })?;

    let mut trail = AuditTrail::default();

    let overtime_in_range = filter_by_date_range(overtime_records, range)?;
    let payments_in_range = filter_by_date_range(payments, range)?;
    trail.record_range(range);

    let (period_start, period_end) = range.resolve(employee.hire_date, as_of);
    let periods = period_count(period_start, period_end);
    let salary_total = monthly_salary
        .checked_mul(Decimal::from(periods))
        .ok_or_else(|| LedgerError::overflow("fixed salary total"))?;
    trail.record(
        "fixed_salary",
        "Fixed Salary Periods",
        serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "period_start": period_start.to_string(),
            "period_end": period_end.to_string()
        }),
        serde_json::json!({
            "period_count": periods,
            "salary_total": salary_total.to_string()
        }),
        format!(
            "{} period(s) from {} to {} x {} = {}",
            periods, period_start, period_end, monthly_salary, salary_total
        ),
    );

    let overtime_total = sum_overtime(overtime_in_range.iter().copied())?;
    trail.record(
        "sum_overtime",
        "Sum Overtime Records",
        serde_json::json!({
            "records": overtime_records.len(),
            "included": overtime_in_range.len()
        }),
        serde_json::json!({ "overtime_total": overtime_total.to_string() }),
        format!(
            "{} of {} overtime records in range total {}",
            overtime_in_range.len(),
            overtime_records.len(),
            overtime_total
        ),
    );

    let paid = sum_payments(payments_in_range.iter().copied())?;
    trail.record_payments(payments.len(), payments_in_range.len(), paid);

    let earned = salary_total
        .checked_add(overtime_total)
        .ok_or_else(|| LedgerError::overflow("earned total"))?;
    let summary = ReportSummary::new(earned, paid)?;
    trail.record_balance(&summary);

    Ok(SummaryResult {
        summary,
        breakdown: EarningsBreakdown {
            overtime_total,
            salary_total,
            period_count: periods,
            ..EarningsBreakdown::default()
        },
        audit_steps: trail.steps,
    })
}

/// Computes the summary for an employee from their full ledger.
///
/// Picks the contractual or fixed computation from the employee's
/// compensation and adds the informational advances total.
///
/// # Errors
///
/// Returns `EmployeeMismatch` when any record belongs to a different
/// employee, or when the ledger holds records of a kind the employee cannot
/// have (work records for a fixed employee, overtime for a contractual one).
pub fn summarize_employee(
    employee: &Employee,
    ledger: &EmployeeLedger,
    range: &DateRange,
    as_of: NaiveDate,
    strategy: PeriodStrategy,
) -> LedgerResult<SummaryResult> {
    if let Some(other) = ledger.employee_ids().find(|id| *id != employee.id) {
        return Err(LedgerError::EmployeeMismatch {
            employee_id: employee.id.clone(),
            message: format!("ledger contains a record for employee '{}'", other),
        });
    }

    let mut result = match employee.kind() {
        EmployeeKind::Contractual => {
            if !ledger.overtime_records.is_empty() {
                return Err(LedgerError::EmployeeMismatch {
                    employee_id: employee.id.clone(),
                    message: "contractual employee has overtime records".to_string(),
                });
            }
            compute_contractual_summary(&ledger.work_records, &ledger.salary_payments, range)?
        }
        EmployeeKind::Fixed => {
            if !ledger.work_records.is_empty() {
                return Err(LedgerError::EmployeeMismatch {
                    employee_id: employee.id.clone(),
                    message: "fixed employee has work records".to_string(),
                });
            }
            compute_fixed_summary(
                employee,
                &ledger.overtime_records,
                &ledger.salary_payments,
                range,
                as_of,
                period_counter(strategy),
            )?
        }
    };

    result.breakdown.advances_total =
        sum_advances(filter_by_date_range(&ledger.advances, range)?)?;
    Ok(result)
}
