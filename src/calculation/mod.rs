//! The balance engine.
//!
//! This module filters ledger records by date range, sums them, counts
//! fixed-salary periods and derives the earned/paid/balance summary for
//! contractual and fixed employees.

mod balance;
mod filter;
mod periods;
mod totals;

pub use balance::{
    EarningsBreakdown, SummaryResult, compute_contractual_summary, compute_fixed_summary,
    summarize_employee,
};
pub use filter::filter_by_date_range;
pub use periods::{PeriodCountFn, calendar_month_periods, period_counter, thirty_day_periods};
pub use totals::{sum_advances, sum_overtime, sum_payments, sum_work};
