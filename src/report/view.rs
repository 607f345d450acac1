//! Report and payslip view model.
//!
//! [`assemble_report`] turns a computed summary, the employee and the
//! records in range into display-ready rows and figures. It performs no I/O
//! and never changes a figure: every displayed amount sits next to its raw
//! value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{SummaryResult, filter_by_date_range};
use crate::config::{FormatConfig, OrganizationConfig};
use crate::error::LedgerResult;
use crate::models::{
    Advance, BalanceStatus, DateRange, Employee, EmployeeKind, EmployeeLedger, OvertimeRecord,
    ReportSummary, SalaryPayment, WorkRecord,
};
use crate::money::{format_currency, format_date};

use super::labels::{balance_label, displayed_balance};

/// Which document the view is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// On-screen or printed statement.
    #[default]
    Statement,
    /// Payslip handed to the employee.
    Payslip,
}

impl ReportKind {
    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Statement => "Payroll Statement",
            ReportKind::Payslip => "Payslip",
        }
    }
}

/// The records in range, borrowed from a ledger.
#[derive(Debug, Clone, Default)]
pub struct ReportRecords<'a> {
    /// Work records in range.
    pub work_records: Vec<&'a WorkRecord>,
    /// Overtime records in range.
    pub overtime_records: Vec<&'a OvertimeRecord>,
    /// Payments in range.
    pub salary_payments: Vec<&'a SalaryPayment>,
    /// Advances in range.
    pub advances: Vec<&'a Advance>,
}

impl<'a> ReportRecords<'a> {
    /// Selects the ledger records that fall inside `range`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when the range start is after its end.
    pub fn filtered(ledger: &'a EmployeeLedger, range: &DateRange) -> LedgerResult<Self> {
        Ok(Self {
            work_records: filter_by_date_range(&ledger.work_records, range)?,
            overtime_records: filter_by_date_range(&ledger.overtime_records, range)?,
            salary_payments: filter_by_date_range(&ledger.salary_payments, range)?,
            advances: filter_by_date_range(&ledger.advances, range)?,
        })
    }
}

/// One line of work or overtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Source record id.
    pub record_id: Uuid,
    /// Record date.
    pub date: NaiveDate,
    /// Formatted date.
    pub date_display: String,
    /// Description.
    pub description: String,
    /// Quantity or hours; `None` for a lump-sum work entry.
    pub quantity: Option<Decimal>,
    /// Formatted quantity, blank for a lump sum.
    pub quantity_display: String,
    /// Unit price or hourly rate.
    pub rate: Decimal,
    /// Formatted rate.
    pub rate_display: String,
    /// Line total.
    pub total: Decimal,
    /// Formatted line total.
    pub total_display: String,
}

/// One payment line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// Source record id.
    pub record_id: Uuid,
    /// Payment date.
    pub date: NaiveDate,
    /// Formatted date.
    pub date_display: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Formatted amount.
    pub amount_display: String,
    /// Notes recorded with the payment.
    pub notes: Option<String>,
    /// Payment type recorded with the payment.
    pub payment_type: Option<String>,
    /// Work records the payment was linked to.
    pub work_record_ids: Vec<Uuid>,
}

/// A labelled monetary figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFigure {
    /// Label shown beside the figure.
    pub label: String,
    /// The raw value, unrounded and signed.
    pub amount: Decimal,
    /// The formatted value as displayed.
    pub display: String,
}

/// The salary component of a fixed employee's earnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSalaryLine {
    /// Salary per monthly period.
    pub monthly_salary: Decimal,
    /// Periods counted.
    pub period_count: u32,
    /// `monthly_salary * period_count`.
    pub total: Decimal,
    /// Formatted description, e.g. "1 x $5,000.00 = $5,000.00".
    pub display: String,
}

/// A render-ready report or payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    /// Document kind.
    pub kind: ReportKind,
    /// Document title.
    pub title: String,
    /// Issuing organisation.
    pub organization: OrganizationConfig,
    /// Employee id.
    pub employee_id: String,
    /// Employee name.
    pub employee_name: String,
    /// Employee role, if recorded.
    pub employee_role: Option<String>,
    /// Contractual or fixed.
    pub employee_kind: EmployeeKind,
    /// The range covered.
    pub range: DateRange,
    /// Human-readable period text.
    pub period_label: String,
    /// Work rows (contractual) or overtime rows (fixed).
    pub rows: Vec<ReportRow>,
    /// Payment rows.
    pub payments: Vec<PaymentRow>,
    /// Salary line, fixed employees only.
    pub fixed_salary: Option<FixedSalaryLine>,
    /// Advances given in range. Shown for information; not part of the
    /// balance.
    pub advances: SummaryFigure,
    /// Total earned.
    pub earned: SummaryFigure,
    /// Total paid.
    pub paid: SummaryFigure,
    /// Balance. `amount` keeps its sign; `display` shows the magnitude.
    pub balance: SummaryFigure,
    /// Caption explaining the balance direction.
    pub balance_caption: String,
    /// Balance direction.
    pub status: BalanceStatus,
}

impl ReportView {
    /// Recovers the summary the view was assembled from.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            earned: self.earned.amount,
            paid: self.paid.amount,
            balance: self.balance.amount,
            is_negative_balance: self.balance.amount < Decimal::ZERO,
        }
    }
}

/// Formats the period covered by a range.
///
/// # Examples
///
/// ```
/// use payroll_ledger::config::FormatConfig;
/// use payroll_ledger::models::DateRange;
/// use payroll_ledger::report::period_label;
/// use chrono::NaiveDate;
///
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
/// )?;
/// assert_eq!(period_label(&range, &FormatConfig::default()), "01/09/2025 to 30/09/2025");
/// assert_eq!(period_label(&DateRange::unbounded(), &FormatConfig::default()), "All records");
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
pub fn period_label(range: &DateRange, format: &FormatConfig) -> String {
    match (range.start, range.end) {
        (Some(start), Some(end)) if start == end => format_date(start, format),
        (Some(start), Some(end)) => format!(
            "{} to {}",
            format_date(start, format),
            format_date(end, format)
        ),
        (Some(start), None) => format!("From {}", format_date(start, format)),
        (None, Some(end)) => format!("Up to {}", format_date(end, format)),
        (None, None) => "All records".to_string(),
    }
}

fn figure(label: &str, amount: Decimal, display: Decimal, format: &FormatConfig) -> SummaryFigure {
    SummaryFigure {
        label: label.to_string(),
        amount,
        display: format_currency(display, format),
    }
}

fn work_row(record: &WorkRecord, format: &FormatConfig) -> LedgerResult<ReportRow> {
    let total = record.line_total()?;
    Ok(ReportRow {
        record_id: record.id,
        date: record.date,
        date_display: format_date(record.date, format),
        description: record.description.clone(),
        quantity: record.quantity,
        quantity_display: record
            .quantity
            .map(|q| q.normalize().to_string())
            .unwrap_or_default(),
        rate: record.price,
        rate_display: format_currency(record.price, format),
        total,
        total_display: format_currency(total, format),
    })
}

fn overtime_row(record: &OvertimeRecord, format: &FormatConfig) -> ReportRow {
    ReportRow {
        record_id: record.id,
        date: record.date,
        date_display: format_date(record.date, format),
        description: record.description.clone(),
        quantity: Some(record.hours),
        quantity_display: record.hours.normalize().to_string(),
        rate: record.rate,
        rate_display: format_currency(record.rate, format),
        total: record.amount,
        total_display: format_currency(record.amount, format),
    }
}

fn payment_row(record: &SalaryPayment, format: &FormatConfig) -> PaymentRow {
    PaymentRow {
        record_id: record.id,
        date: record.date,
        date_display: format_date(record.date, format),
        amount: record.amount,
        amount_display: format_currency(record.amount, format),
        notes: record.notes.clone(),
        payment_type: record.payment_type.clone(),
        work_record_ids: record.work_record_ids.clone(),
    }
}

/// Assembles the view for one employee.
///
/// `records` should hold the records inside `range`, typically from
/// [`ReportRecords::filtered`], and `result` the summary computed over the
/// same range. Rows follow the employee's variant: work rows for
/// contractual staff, overtime rows plus a salary line for fixed staff.
///
/// # Errors
///
/// Returns `DataIntegrity` when a work row's line total does not fit in a
/// `Decimal`.
pub fn assemble_report(
    kind: ReportKind,
    employee: &Employee,
    records: &ReportRecords<'_>,
    result: &SummaryResult,
    range: &DateRange,
    organization: &OrganizationConfig,
    format: &FormatConfig,
) -> LedgerResult<ReportView> {
    let summary = &result.summary;

    let (rows, fixed_salary) = match employee.kind() {
        EmployeeKind::Contractual => (
            records
                .work_records
                .iter()
                .map(|r| work_row(r, format))
                .collect::<LedgerResult<Vec<_>>>()?,
            None,
        ),
        EmployeeKind::Fixed => {
            let monthly_salary = employee.monthly_salary().unwrap_or_default();
            let line = FixedSalaryLine {
                monthly_salary,
                period_count: result.breakdown.period_count,
                total: result.breakdown.salary_total,
                display: format!(
                    "{} x {} = {}",
                    result.breakdown.period_count,
                    format_currency(monthly_salary, format),
                    format_currency(result.breakdown.salary_total, format)
                ),
            };
            (
                records
                    .overtime_records
                    .iter()
                    .map(|r| overtime_row(r, format))
                    .collect(),
                Some(line),
            )
        }
    };

    let status = summary.status();
    let label = balance_label(status);

    Ok(ReportView {
        kind,
        title: kind.title().to_string(),
        organization: organization.clone(),
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        employee_role: employee.role.clone(),
        employee_kind: employee.kind(),
        range: *range,
        period_label: period_label(range, format),
        rows,
        payments: records
            .salary_payments
            .iter()
            .map(|p| payment_row(p, format))
            .collect(),
        fixed_salary,
        advances: figure(
            "Advances",
            result.breakdown.advances_total,
            result.breakdown.advances_total,
            format,
        ),
        earned: figure("Total earned", summary.earned, summary.earned, format),
        paid: figure("Total paid", summary.paid, summary.paid, format),
        balance: SummaryFigure {
            label: label.label.to_string(),
            amount: summary.balance,
            display: format_currency(displayed_balance(summary.balance), format),
        },
        balance_caption: label.caption.to_string(),
        status,
    })
}
