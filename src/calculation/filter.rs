//! Date range filtering.

use crate::error::LedgerResult;
use crate::models::{DateRange, Dated};

/// Returns the records whose date falls inside `range`, in input order.
///
/// Both bounds are inclusive and compared as calendar dates. An unbounded
/// range keeps every record.
///
/// # Errors
///
/// Returns `InvalidRange` when both bounds are set and the start is after
/// the end.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::filter_by_date_range;
/// use payroll_ledger::models::{Advance, DateRange};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let advance = |d: u32| Advance {
///     id: Uuid::nil(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 9, d).unwrap(),
///     amount: Decimal::new(100, 0),
///     reason: None,
/// };
/// let records = vec![advance(1), advance(15), advance(30)];
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
/// )?;
///
/// assert_eq!(filter_by_date_range(&records, &range)?.len(), 2);
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
pub fn filter_by_date_range<'a, R: Dated>(
    records: &'a [R],
    range: &DateRange,
) -> LedgerResult<Vec<&'a R>> {
    range.validate()?;
    Ok(records.iter().filter(|r| range.contains(r.date())).collect())
}
