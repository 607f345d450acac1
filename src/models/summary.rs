//! Derived balance summary and audit trail models.
//!
//! A [`ReportSummary`] is never stored. It is recomputed from the ledger for
//! every view, print or payslip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Earned, paid and balance totals for one employee over one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total earned over the range.
    pub earned: Decimal,
    /// Total paid over the range.
    pub paid: Decimal,
    /// `earned - paid`; positive means money is owed to the employee.
    pub balance: Decimal,
    /// True when the employee has been paid more than they earned.
    pub is_negative_balance: bool,
}

impl ReportSummary {
    /// Builds a summary, deriving the balance from earned and paid.
    ///
    /// # Errors
    ///
    /// Returns `DataIntegrity` when `earned - paid` does not fit in a
    /// `Decimal`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_ledger::models::{BalanceStatus, ReportSummary};
    /// use rust_decimal::Decimal;
    ///
    /// let summary = ReportSummary::new(Decimal::new(5000, 0), Decimal::new(5500, 0))?;
    /// assert_eq!(summary.balance, Decimal::new(-500, 0));
    /// assert!(summary.is_negative_balance);
    /// assert_eq!(summary.status(), BalanceStatus::Overpaid);
    /// # Ok::<(), payroll_ledger::error::LedgerError>(())
    /// ```
    pub fn new(earned: Decimal, paid: Decimal) -> LedgerResult<Self> {
        let balance = earned
            .checked_sub(paid)
            .ok_or_else(|| LedgerError::overflow("balance"))?;
        Ok(Self {
            earned,
            paid,
            balance,
            is_negative_balance: balance < Decimal::ZERO,
        })
    }

    /// A summary with every figure at zero.
    pub fn zero() -> Self {
        Self {
            earned: Decimal::ZERO,
            paid: Decimal::ZERO,
            balance: Decimal::ZERO,
            is_negative_balance: false,
        }
    }

    /// Classifies the balance by sign.
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }
}

/// The sign of a balance, as shown on every report and payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Positive balance: money is due to the employee.
    Outstanding,
    /// Negative balance: the employee has been paid too much.
    Overpaid,
    /// Zero balance.
    Settled,
}

impl BalanceStatus {
    /// Classifies a balance.
    pub fn from_balance(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceStatus::Outstanding
        } else if balance < Decimal::ZERO {
            BalanceStatus::Overpaid
        } else {
            BalanceStatus::Settled
        }
    }
}

/// One step of a summary computation, recorded for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of this step in the trail, starting at 1.
    pub step_number: u32,
    /// Stable identifier of the rule applied.
    pub rule_id: String,
    /// Human-readable name of the rule applied.
    pub rule_name: String,
    /// Inputs the rule saw.
    pub input: serde_json::Value,
    /// What the rule produced.
    pub output: serde_json::Value,
    /// Explanation of the arithmetic.
    pub reasoning: String,
}
