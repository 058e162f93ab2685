use chrono::NaiveDate;
use tracing::debug;

use crate::{
    core::errors::{ExpenseError, Result},
    ledger::{Category, ExpenseRecord, Recurrence},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const UNSET: &str = "N/A";

/// Raw, user-supplied fields for a new expense.
#[derive(Debug, Clone, Default)]
pub struct RawExpense<'a> {
    pub amount: &'a str,
    pub category: &'a str,
    pub recurrence: Option<&'a str>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Turns raw strings into well-formed [`ExpenseRecord`] values.
pub struct InputValidator;

impl InputValidator {
    pub fn parse_amount(raw: &str) -> Result<f64> {
        let amount: f64 = raw.trim().parse().map_err(|_| {
            ExpenseError::InvalidInput(format!(
                "`{}` is not an amount; put the amount first, then the category (e.g. `42 food`)",
                raw.trim()
            ))
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseError::InvalidInput(
                "amount must be greater than zero".into(),
            ));
        }
        Ok(amount)
    }

    /// Parses `YYYY-MM-DD`; empty input or `N/A` means unset.
    pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNSET) {
            return Ok(None);
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                ExpenseError::InvalidInput(format!(
                    "invalid date `{}`; use YYYY-MM-DD",
                    trimmed
                ))
            })
    }

    pub fn parse_recurrence(raw: Option<&str>) -> Result<Recurrence> {
        raw.map_or(Ok(Recurrence::Once), str::parse)
    }

    /// Validates every field and assembles the record dated `today`.
    pub fn build(raw: &RawExpense<'_>, today: NaiveDate) -> Result<ExpenseRecord> {
        let amount = Self::parse_amount(raw.amount)?;
        let category = Category::from_keyword(raw.category)?;
        let recurrence = Self::parse_recurrence(raw.recurrence)?;
        let start_date = raw.start_date.map(Self::parse_date).transpose()?.flatten();
        let end_date = raw.end_date.map(Self::parse_date).transpose()?.flatten();

        if !recurrence.is_recurring() && (start_date.is_some() || end_date.is_some()) {
            return Err(ExpenseError::InvalidInput(
                "start and end dates require a recurrence".into(),
            ));
        }

        let start_date = if recurrence.is_recurring() {
            Some(start_date.unwrap_or(today))
        } else {
            None
        };

        debug!(amount, %category, %recurrence, "validated expense input");
        Ok(ExpenseRecord::new(amount, category, today)?
            .with_recurrence(recurrence, start_date, end_date)
            .with_description(raw.description.map(str::to_string)))
    }
}
