use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::errors::ExpenseError;

/// Repetition unit of an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Single, non-repeating charge.
    #[default]
    Once,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub const REPEATING: [Recurrence; 4] = [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Monthly,
        Recurrence::Yearly,
    ];

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::Once)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Once => "N/A",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Recurrence {
    type Err = ExpenseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "n/a" | "none" | "once" => Ok(Recurrence::Once),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(ExpenseError::InvalidInput(format!(
                "invalid recurrence frequency `{}`; allowed values: {}",
                other,
                Recurrence::REPEATING
                    .iter()
                    .map(Recurrence::label)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether `date` falls on the last calendar day of its month.
pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}
