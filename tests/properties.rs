//! Property tests for the balance engine and report assembler.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use payroll_ledger::calculation::{
    calendar_month_periods, compute_contractual_summary, compute_fixed_summary,
    filter_by_date_range, thirty_day_periods,
};
use payroll_ledger::config::{FormatConfig, OrganizationConfig};
use payroll_ledger::models::{
    Compensation, DateRange, Employee, EmployeeLedger, EmployeeStatus, OvertimeRecord,
    SalaryPayment, WorkRecord,
};
use payroll_ledger::report::{ReportKind, ReportRecords, assemble_report};
use payroll_ledger::validation::{FieldValue, WorkRecordInput, validate_work_record};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn work(offset: u64, quantity: Option<i64>, price: i64) -> WorkRecord {
    let quantity = quantity.map(cents);
    let price = cents(price);
    WorkRecord {
        id: Uuid::new_v4(),
        employee_id: "emp_001".to_string(),
        date: day(offset),
        description: "Work".to_string(),
        quantity,
        price,
        total: quantity.unwrap_or(Decimal::ONE) * price,
    }
}

fn payment(offset: u64, amount: i64) -> SalaryPayment {
    SalaryPayment {
        id: Uuid::new_v4(),
        employee_id: "emp_001".to_string(),
        date: day(offset),
        amount: cents(amount),
        notes: None,
        payment_type: None,
        work_record_ids: vec![],
    }
}

fn overtime(offset: u64, amount: i64) -> OvertimeRecord {
    OvertimeRecord {
        id: Uuid::new_v4(),
        employee_id: "emp_001".to_string(),
        date: day(offset),
        description: "Overtime".to_string(),
        hours: Decimal::ONE,
        rate: cents(amount),
        amount: cents(amount),
    }
}

fn fixed_employee(salary: i64) -> Employee {
    Employee {
        id: "emp_001".to_string(),
        name: "Rosa Diaz".to_string(),
        phone: None,
        role: None,
        hire_date: day(0),
        status: EmployeeStatus::Active,
        compensation: Compensation::Fixed {
            monthly_salary: cents(salary),
        },
    }
}

fn work_strategy() -> impl Strategy<Value = Vec<WorkRecord>> {
    prop::collection::vec(
        (0u64..365, prop::option::of(0i64..10_000), 0i64..1_000_000),
        0..20,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(offset, quantity, price)| work(offset, quantity, price))
            .collect()
    })
}

fn payment_strategy() -> impl Strategy<Value = Vec<SalaryPayment>> {
    prop::collection::vec((0u64..365, 0i64..1_000_000), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(offset, amount)| payment(offset, amount))
            .collect()
    })
}

fn range_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0u64..365, 0u64..365).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn prop_validated_work_total_is_quantity_times_price(
        quantity in prop::option::of(0i64..100_000),
        price in 0i64..10_000_000,
    ) {
        let input = WorkRecordInput {
            date: Some("2025-09-15".into()),
            description: Some("Work".into()),
            quantity: quantity.map(|q| FieldValue::Text(cents(q).to_string())),
            price: Some(FieldValue::Text(cents(price).to_string())),
        };

        let record = validate_work_record("emp_001", &input).unwrap();
        match quantity {
            Some(q) => prop_assert_eq!(record.total, cents(q) * cents(price)),
            None => prop_assert_eq!(record.total, cents(price)),
        }
    }

    #[test]
    fn prop_filter_is_inclusive_and_monotonic(
        records in payment_strategy(),
        (start, end) in range_strategy(),
        widen_start in 0u64..30,
        widen_end in 0u64..30,
    ) {
        let narrow = DateRange::between(day(start), day(end)).unwrap();
        let wide = DateRange::between(
            day(start.saturating_sub(widen_start)),
            day(end + widen_end),
        )
        .unwrap();

        let in_narrow = filter_by_date_range(&records, &narrow).unwrap();
        let in_wide = filter_by_date_range(&records, &wide).unwrap();

        for record in &in_narrow {
            prop_assert!(record.date >= day(start) && record.date <= day(end));
            prop_assert!(in_wide.iter().any(|r| r.id == record.id));
        }
        prop_assert!(in_wide.len() >= in_narrow.len());
    }

    #[test]
    fn prop_contractual_balance_is_exact_and_idempotent(
        work_records in work_strategy(),
        payments in payment_strategy(),
        (start, end) in range_strategy(),
    ) {
        let range = DateRange::between(day(start), day(end)).unwrap();

        let first = compute_contractual_summary(&work_records, &payments, &range).unwrap();
        let second = compute_contractual_summary(&work_records, &payments, &range).unwrap();

        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(first.summary.balance, first.summary.earned - first.summary.paid);
        prop_assert_eq!(
            first.summary.is_negative_balance,
            first.summary.balance < Decimal::ZERO
        );
    }

    #[test]
    fn prop_fixed_balance_is_exact_and_idempotent(
        salary in 0i64..2_000_000,
        overtime_amounts in prop::collection::vec((0u64..365, 0i64..100_000), 0..10),
        payments in payment_strategy(),
        (start, end) in range_strategy(),
    ) {
        let employee = fixed_employee(salary);
        let overtime_records: Vec<OvertimeRecord> = overtime_amounts
            .into_iter()
            .map(|(offset, amount)| overtime(offset, amount))
            .collect();
        let range = DateRange::between(day(start), day(end)).unwrap();

        let first = compute_fixed_summary(
            &employee, &overtime_records, &payments, &range, day(365), calendar_month_periods,
        )
        .unwrap();
        let second = compute_fixed_summary(
            &employee, &overtime_records, &payments, &range, day(365), calendar_month_periods,
        )
        .unwrap();

        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(first.summary.balance, first.summary.earned - first.summary.paid);
        prop_assert_eq!(
            first.summary.earned,
            first.breakdown.salary_total + first.breakdown.overtime_total
        );
    }

    #[test]
    fn prop_period_counts_are_at_least_one_for_valid_ranges((start, end) in range_strategy()) {
        let calendar = calendar_month_periods(day(start), day(end));
        let thirty = thirty_day_periods(day(start), day(end));
        prop_assert!(calendar >= 1);
        prop_assert!(thirty >= 1);
        // A calendar month is never longer than 31 days.
        let days = (day(end) - day(start)).num_days() as u32 + 1;
        prop_assert!(calendar <= days.div_ceil(28));
    }

    #[test]
    fn prop_report_round_trips_summary(
        work_records in work_strategy(),
        payments in payment_strategy(),
        (start, end) in range_strategy(),
    ) {
        let employee = Employee {
            compensation: Compensation::Contractual,
            ..fixed_employee(0)
        };
        let ledger = EmployeeLedger {
            work_records,
            salary_payments: payments,
            ..EmployeeLedger::default()
        };
        let range = DateRange::between(day(start), day(end)).unwrap();
        let result =
            compute_contractual_summary(&ledger.work_records, &ledger.salary_payments, &range)
                .unwrap();
        let records = ReportRecords::filtered(&ledger, &range).unwrap();

        let view = assemble_report(
            ReportKind::Statement,
            &employee,
            &records,
            &result,
            &range,
            &OrganizationConfig::default(),
            &FormatConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(view.summary(), result.summary);
        prop_assert_eq!(view.rows.len(), records.work_records.len());
    }
}
