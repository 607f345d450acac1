//! Balance labelling shared by every report kind.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::BalanceStatus;

/// The wording shown next to a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceLabel {
    /// Short label, e.g. "Outstanding".
    pub label: &'static str,
    /// Longer caption, e.g. "Due to employee".
    pub caption: &'static str,
}

/// Returns the label for a balance status.
///
/// The same wording is used for contractual and fixed employees and for both
/// statements and payslips.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::BalanceStatus;
/// use payroll_ledger::report::balance_label;
///
/// assert_eq!(balance_label(BalanceStatus::Overpaid).label, "Overpaid");
/// assert_eq!(balance_label(BalanceStatus::Settled).caption, "Cleared");
/// ```
pub fn balance_label(status: BalanceStatus) -> BalanceLabel {
    match status {
        BalanceStatus::Outstanding => BalanceLabel {
            label: "Outstanding",
            caption: "Due to employee",
        },
        BalanceStatus::Overpaid => BalanceLabel {
            label: "Overpaid",
            caption: "Paid in excess",
        },
        BalanceStatus::Settled => BalanceLabel {
            label: "Settled",
            caption: "Cleared",
        },
    }
}

/// The magnitude shown for a balance. Overpaid balances are displayed
/// without their sign; the label carries the direction.
pub fn displayed_balance(balance: Decimal) -> Decimal {
    balance.abs()
}
