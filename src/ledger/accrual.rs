//! Accrual of recurring expenses.
//!
//! The engine is a pure function of its inputs: the reference date is always
//! passed in by the caller, never read from the wall clock here.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::{recurrence::is_last_day_of_month, DateWindow, Recurrence};
use crate::core::errors::{ExpenseError, Result};

/// Computes how much an expense has accumulated as of a reference date.
pub struct AccrualEngine;

impl AccrualEngine {
    /// Total accrued for an expense.
    ///
    /// Non-repeating expenses return `base_amount` untouched. Recurring ones
    /// return `period_count * base_amount` over the effective window, or zero
    /// when that window has not begun yet.
    ///
    /// # Errors
    ///
    /// `ExpenseError::ContractViolation` when `base_amount` is not a finite,
    /// strictly positive number. Callers are expected to validate upstream.
    pub fn compute(
        base_amount: f64,
        recurrence: Recurrence,
        date_added: NaiveDate,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> Result<f64> {
        ensure_positive(base_amount)?;

        if !recurrence.is_recurring() {
            return Ok(base_amount);
        }

        let Some(window) = Self::effective_window(date_added, start_date, end_date, reference)
        else {
            trace!(%recurrence, %reference, "accrual window not started");
            return Ok(0.0);
        };

        let periods = Self::period_count(recurrence, &window);
        trace!(%recurrence, start = %window.start, end = %window.end, periods, "accrued");
        Ok(periods as f64 * base_amount)
    }

    /// Resolves the `[start, end]` range an expense accrues over.
    ///
    /// Start defaults to `date_added`. End defaults to `reference` and is
    /// clamped to it when later. Returns `None` if the resolved end precedes
    /// the resolved start.
    pub fn effective_window(
        date_added: NaiveDate,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        reference: NaiveDate,
    ) -> Option<DateWindow> {
        let start = start_date.unwrap_or(date_added);
        let end = end_date.map_or(reference, |end| end.min(reference));
        DateWindow::new(start, end).ok()
    }

    /// Number of charged periods inside `window`, the start period included.
    pub fn period_count(recurrence: Recurrence, window: &DateWindow) -> u64 {
        let periods = match recurrence {
            Recurrence::Once => 1,
            Recurrence::Daily => window.elapsed_days() + 1,
            Recurrence::Weekly => window.elapsed_days().div_euclid(7) + 1,
            Recurrence::Monthly => monthly_span(window) + 1,
            Recurrence::Yearly => window.year_span() + 1,
        };
        u64::try_from(periods).unwrap_or(0)
    }
}

/// Month distance corrected for the day of month.
///
/// An end falling on the last day of a month shorter than the start's day of
/// month earns the extra period; any other end before the start's day of
/// month has not completed the current month.
fn monthly_span(window: &DateWindow) -> i64 {
    let span = window.month_span();
    match window.end.day().cmp(&window.start.day()) {
        Ordering::Less if is_last_day_of_month(window.end) => span + 1,
        Ordering::Less => span - 1,
        _ => span,
    }
}

fn ensure_positive(base_amount: f64) -> Result<()> {
    if base_amount.is_finite() && base_amount > 0.0 {
        Ok(())
    } else {
        Err(ExpenseError::ContractViolation(format!(
            "base amount must be positive, got {}",
            base_amount
        )))
    }
}
