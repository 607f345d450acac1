//! Monthly salary period counting.
//!
//! Fixed salaries are quoted per month. These functions decide how many
//! monthly periods an inclusive date range is worth; a partial month always
//! counts as a whole one.

use chrono::{Datelike, Months, NaiveDate};

use crate::config::PeriodStrategy;

/// Signature shared by every period counting strategy.
pub type PeriodCountFn = fn(NaiveDate, NaiveDate) -> u32;

/// Counts whole calendar months from `start`, plus one for any remainder.
///
/// Returns zero when `start` is after `end`.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calendar_month_periods;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// assert_eq!(calendar_month_periods(d(9, 1), d(9, 30)), 1);
/// assert_eq!(calendar_month_periods(d(10, 1), d(10, 31)), 1);
/// assert_eq!(calendar_month_periods(d(9, 1), d(9, 15)), 1);
/// assert_eq!(calendar_month_periods(d(9, 15), d(10, 20)), 2);
/// assert_eq!(calendar_month_periods(d(1, 1), d(12, 31)), 12);
/// ```
pub fn calendar_month_periods(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    let after_end = end.succ_opt().unwrap_or(end);

    let estimate = (after_end.year() - start.year()) * 12 + after_end.month() as i32
        - start.month() as i32;
    let mut whole = u32::try_from(estimate).unwrap_or(0);

    // Month lengths differ, so the estimate can overshoot by one.
    while whole > 0
        && start
            .checked_add_months(Months::new(whole))
            .is_none_or(|boundary| boundary > after_end)
    {
        whole -= 1;
    }

    let boundary = start
        .checked_add_months(Months::new(whole))
        .unwrap_or(after_end);
    if boundary < after_end { whole + 1 } else { whole }
}

/// Counts periods as inclusive days divided by thirty, rounded up.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::thirty_day_periods;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// assert_eq!(thirty_day_periods(d(9, 1), d(9, 30)), 1);
/// assert_eq!(thirty_day_periods(d(10, 1), d(10, 31)), 2);
/// ```
pub fn thirty_day_periods(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    let days = (end - start).num_days() + 1;
    u32::try_from((days + 29) / 30).unwrap_or(u32::MAX)
}

/// Returns the counting function for a configured strategy.
pub fn period_counter(strategy: PeriodStrategy) -> PeriodCountFn {
    match strategy {
        PeriodStrategy::CalendarMonth => calendar_month_periods,
        PeriodStrategy::ThirtyDay => thirty_day_periods,
    }
}
