use chrono::NaiveDate;
use expense_core::{
    core::errors::ExpenseError,
    ledger::{AccrualEngine, Recurrence},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reference() -> NaiveDate {
    date(2025, 6, 1)
}

#[test]
fn one_off_expense_ignores_dates() {
    let total = AccrualEngine::compute(
        100.0,
        Recurrence::Once,
        date(2025, 1, 1),
        Some(date(2030, 1, 1)),
        Some(date(2020, 1, 1)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 100.0);
}

#[test]
fn daily_counts_start_day() {
    let total = AccrualEngine::compute(
        50.0,
        Recurrence::Daily,
        date(2025, 1, 1),
        Some(date(2025, 1, 1)),
        Some(date(2025, 1, 10)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 500.0);
}

#[test]
fn weekly_counts_started_weeks() {
    let total = AccrualEngine::compute(
        10.0,
        Recurrence::Weekly,
        date(2025, 1, 1),
        Some(date(2025, 1, 1)),
        Some(date(2025, 1, 15)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 30.0);
}

#[test]
fn monthly_end_of_short_month() {
    let total = AccrualEngine::compute(
        20.0,
        Recurrence::Monthly,
        date(2025, 1, 31),
        Some(date(2025, 1, 31)),
        Some(date(2025, 2, 28)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 60.0);
}

#[test]
fn monthly_incomplete_month() {
    let total = AccrualEngine::compute(
        20.0,
        Recurrence::Monthly,
        date(2025, 1, 15),
        Some(date(2025, 1, 15)),
        Some(date(2025, 2, 10)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 20.0);
}

#[test]
fn yearly_counts_calendar_years() {
    let total = AccrualEngine::compute(
        30.0,
        Recurrence::Yearly,
        date(2023, 3, 1),
        Some(date(2023, 3, 1)),
        Some(date(2025, 3, 1)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 90.0);
}

#[test]
fn window_not_yet_started_accrues_nothing() {
    for recurrence in Recurrence::REPEATING {
        let total = AccrualEngine::compute(
            15.0,
            recurrence,
            date(2025, 5, 1),
            Some(date(2025, 7, 1)),
            None,
            reference(),
        )
        .unwrap();
        assert_eq!(total, 0.0, "{recurrence}");
    }
}

#[test]
fn end_before_start_accrues_nothing() {
    let total = AccrualEngine::compute(
        15.0,
        Recurrence::Daily,
        date(2025, 1, 1),
        Some(date(2025, 3, 1)),
        Some(date(2025, 2, 1)),
        reference(),
    )
    .unwrap();
    assert_eq!(total, 0.0);
}

#[test]
fn missing_start_uses_date_added_and_missing_end_uses_reference() {
    let total = AccrualEngine::compute(
        1.0,
        Recurrence::Daily,
        date(2025, 5, 30),
        None,
        None,
        reference(),
    )
    .unwrap();
    assert_eq!(total, 3.0);
}

#[test]
fn future_end_date_is_clamped_to_reference() {
    let clamped = AccrualEngine::compute(
        4.0,
        Recurrence::Weekly,
        date(2025, 1, 1),
        Some(date(2025, 1, 1)),
        Some(date(2026, 1, 1)),
        reference(),
    )
    .unwrap();
    let open = AccrualEngine::compute(
        4.0,
        Recurrence::Weekly,
        date(2025, 1, 1),
        Some(date(2025, 1, 1)),
        None,
        reference(),
    )
    .unwrap();
    assert_eq!(clamped, open);
    // 2025-01-01..2025-06-01 is 151 days: 21 full weeks plus a started one.
    assert_eq!(open, 88.0);
}

#[test]
fn non_positive_amount_is_a_contract_violation() {
    let err = AccrualEngine::compute(
        -1.0,
        Recurrence::Monthly,
        date(2025, 1, 1),
        None,
        None,
        reference(),
    )
    .unwrap_err();
    assert!(matches!(err, ExpenseError::ContractViolation(_)));
}
