//! The report assembler.
//!
//! Turns balance engine output into render-ready statements, payslips and
//! the multi-employee overview. Formatting settings are always passed in.

mod labels;
mod overview;
mod view;

pub use labels::{BalanceLabel, balance_label, displayed_balance};
pub use overview::{OverviewRow, PayrollOverview};
pub use view::{
    FixedSalaryLine, PaymentRow, ReportKind, ReportRecords, ReportRow, ReportView, SummaryFigure,
    assemble_report, period_label,
};
