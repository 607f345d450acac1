//! Multi-employee payroll overview.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BalanceStatus, Employee, EmployeeKind, ReportSummary};

/// One employee's line on the overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewRow {
    /// Employee id.
    pub employee_id: String,
    /// Employee name.
    pub employee_name: String,
    /// Contractual or fixed.
    pub employee_kind: EmployeeKind,
    /// The employee's summary over the overview range.
    pub summary: ReportSummary,
    /// Balance direction.
    pub status: BalanceStatus,
}

/// Totals across every employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PayrollOverview {
    /// One row per employee, in input order.
    pub rows: Vec<OverviewRow>,
    /// Sum of earned.
    pub total_earned: Decimal,
    /// Sum of paid.
    pub total_paid: Decimal,
    /// Sum of positive balances.
    pub total_outstanding: Decimal,
    /// Sum of the magnitudes of negative balances.
    pub total_overpaid: Decimal,
    /// `total_earned - total_paid`.
    pub net_balance: Decimal,
}

impl PayrollOverview {
    /// Aggregates per-employee summaries.
    ///
    /// Outstanding and overpaid balances are totalled separately so that one
    /// employee's overpayment never hides another's arrears.
    ///
    /// # Errors
    ///
    /// Returns `DataIntegrity` when a total does not fit in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Compensation, Employee, EmployeeStatus, ReportSummary};
    /// use payroll_ledger::report::PayrollOverview;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let hire = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let employee = |id: &str| Employee {
    ///     id: id.to_string(),
    ///     name: id.to_string(),
    ///     phone: None,
    ///     role: None,
    ///     hire_date: hire,
    ///     status: EmployeeStatus::Active,
    ///     compensation: Compensation::Contractual,
    /// };
    /// let (a, b) = (employee("a"), employee("b"));
    /// let overview = PayrollOverview::from_summaries([
    ///     (&a, ReportSummary::new(Decimal::new(2500, 0), Decimal::new(1500, 0))?),
    ///     (&b, ReportSummary::new(Decimal::new(5000, 0), Decimal::new(5500, 0))?),
    /// ])?;
    /// assert_eq!(overview.total_outstanding, Decimal::new(1000, 0));
    /// assert_eq!(overview.total_overpaid, Decimal::new(500, 0));
    /// assert_eq!(overview.net_balance, Decimal::new(500, 0));
    /// # Ok::<(), payroll_ledger::error::LedgerError>(())
    /// ```
    pub fn from_summaries<'a, I>(summaries: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = (&'a Employee, ReportSummary)>,
    {
        let mut overview = PayrollOverview::default();

        for (employee, summary) in summaries {
            accumulate(&mut overview.total_earned, summary.earned, "overview earned total")?;
            accumulate(&mut overview.total_paid, summary.paid, "overview paid total")?;
            match summary.status() {
                BalanceStatus::Outstanding => accumulate(
                    &mut overview.total_outstanding,
                    summary.balance,
                    "overview outstanding total",
                )?,
                BalanceStatus::Overpaid => accumulate(
                    &mut overview.total_overpaid,
                    summary.balance.abs(),
                    "overview overpaid total",
                )?,
                BalanceStatus::Settled => {}
            }
            overview.rows.push(OverviewRow {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                employee_kind: employee.kind(),
                summary,
                status: summary.status(),
            });
        }

        overview.net_balance = overview
            .total_earned
            .checked_sub(overview.total_paid)
            .ok_or_else(|| LedgerError::overflow("overview net balance"))?;
        Ok(overview)
    }

    /// Number of employees with money still due to them.
    pub fn outstanding_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == BalanceStatus::Outstanding)
            .count()
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal, what: &str) -> LedgerResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| LedgerError::overflow(what))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Compensation, EmployeeStatus};
    use chrono::NaiveDate;

    fn employee(id: &str, compensation: Compensation) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            phone: None,
            role: None,
            hire_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status: EmployeeStatus::Active,
            compensation,
        }
    }

    #[test]
    fn test_empty_overview_is_zero() {
        let overview = PayrollOverview::from_summaries(std::iter::empty()).unwrap();
        assert!(overview.rows.is_empty());
        assert_eq!(overview.net_balance, Decimal::ZERO);
    }

    #[test]
    fn test_overview_totals_by_direction() {
        let a = employee("a", Compensation::Contractual);
        let b = employee(
            "b",
            Compensation::Fixed {
                monthly_salary: Decimal::new(5000, 0),
            },
        );
        let c = employee("c", Compensation::Contractual);

        let overview = PayrollOverview::from_summaries([
            (&a, ReportSummary::new(Decimal::new(2500, 0), Decimal::new(1500, 0)).unwrap()),
            (&b, ReportSummary::new(Decimal::new(5420, 0), Decimal::new(5920, 0)).unwrap()),
            (&c, ReportSummary::new(Decimal::new(300, 0), Decimal::new(300, 0)).unwrap()),
        ])
        .unwrap();

        assert_eq!(overview.rows.len(), 3);
        assert_eq!(overview.rows[1].employee_kind, EmployeeKind::Fixed);
        assert_eq!(overview.rows[2].status, BalanceStatus::Settled);
        assert_eq!(overview.total_earned, Decimal::new(8220, 0));
        assert_eq!(overview.total_paid, Decimal::new(7720, 0));
        assert_eq!(overview.total_outstanding, Decimal::new(1000, 0));
        assert_eq!(overview.total_overpaid, Decimal::new(500, 0));
        assert_eq!(
            overview.net_balance,
            overview.total_outstanding - overview.total_overpaid
        );
        assert_eq!(overview.outstanding_count(), 1);
    }

    #[test]
    fn test_overview_total_past_decimal_max_is_data_integrity() {
        let a = employee("a", Compensation::Contractual);
        let b = employee("b", Compensation::Contractual);
        let large = ReportSummary::new(Decimal::MAX, Decimal::MAX).unwrap();

        let result = PayrollOverview::from_summaries([(&a, large), (&b, large)]);
        assert!(matches!(result, Err(LedgerError::DataIntegrity { .. })));
    }
}
