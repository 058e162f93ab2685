use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::errors::ExpenseError;

/// Inclusive `[start, end]` calendar range an expense accrues over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ExpenseError> {
        if end < start {
            return Err(ExpenseError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Whole days between start and end; zero for a single-day window.
    pub fn elapsed_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Calendar-month distance ignoring the day of month.
    pub fn month_span(&self) -> i64 {
        let years = i64::from(self.end.year() - self.start.year());
        years * 12 + i64::from(self.end.month()) - i64::from(self.start.month())
    }

    /// Calendar-year distance ignoring month and day.
    pub fn year_span(&self) -> i64 {
        i64::from(self.end.year() - self.start.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(DateWindow::new(date(2025, 2, 1), date(2025, 1, 31)).is_err());
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = DateWindow::new(date(2025, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(window.elapsed_days(), 0);
    }

    #[test]
    fn spans_cross_year_boundaries() {
        let window = DateWindow::new(date(2024, 11, 20), date(2026, 2, 3)).unwrap();
        assert_eq!(window.month_span(), 15);
        assert_eq!(window.year_span(), 2);
    }
}
