//! Record totals.
//!
//! Each function sums whatever it is given. Stored values are not
//! re-validated here; a negative stored amount is summed like any other.
//! A total that does not fit in a `Decimal` is a `DataIntegrity` error,
//! never a wrapped or clamped figure.

use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Advance, OvertimeRecord, SalaryPayment, WorkRecord};

fn checked_total<I>(amounts: I, what: &str) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = LedgerResult<Decimal>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount?)
            .ok_or_else(|| LedgerError::overflow(what))
    })
}

/// Sums `quantity x price` over work records, with a missing quantity
/// counting as one.
pub fn sum_work<'a, I>(records: I) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = &'a WorkRecord>,
{
    checked_total(
        records.into_iter().map(WorkRecord::line_total),
        "work total",
    )
}

/// Sums the stored `amount` of each overtime record.
///
/// The amount is not recomputed from hours and rate, so a manually adjusted
/// record keeps its adjusted value.
pub fn sum_overtime<'a, I>(records: I) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = &'a OvertimeRecord>,
{
    checked_total(records.into_iter().map(|r| Ok(r.amount)), "overtime total")
}

/// Sums payment amounts.
pub fn sum_payments<'a, I>(records: I) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = &'a SalaryPayment>,
{
    checked_total(records.into_iter().map(|r| Ok(r.amount)), "payment total")
}

/// Sums advance amounts.
pub fn sum_advances<'a, I>(records: I) -> LedgerResult<Decimal>
where
    I: IntoIterator<Item = &'a Advance>,
{
    checked_total(records.into_iter().map(|r| Ok(r.amount)), "advance total")
}
