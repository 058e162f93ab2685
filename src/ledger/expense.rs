use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AccrualEngine, Category, Recurrence};
use crate::core::errors::{ExpenseError, Result};

/// A single tracked expense, one-off or recurring.
///
/// Construct through [`ExpenseRecord::new`] so the amount invariant holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub base_amount: f64,
    pub category: Category,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpenseRecord {
    pub fn new(base_amount: f64, category: Category, date_added: NaiveDate) -> Result<Self> {
        if !base_amount.is_finite() || base_amount <= 0.0 {
            return Err(ExpenseError::InvalidInput(
                "amount must be greater than zero".into(),
            ));
        }
        Ok(Self {
            base_amount,
            category,
            date_added,
            recurrence: Recurrence::Once,
            start_date: None,
            end_date: None,
            description: None,
        })
    }

    pub fn with_recurrence(
        mut self,
        recurrence: Recurrence,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.recurrence = recurrence;
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|text| !text.trim().is_empty());
        self
    }

    /// Amount accrued as of `reference`.
    pub fn total_amount(&self, reference: NaiveDate) -> Result<f64> {
        AccrualEngine::compute(
            self.base_amount,
            self.recurrence,
            self.date_added,
            self.start_date,
            self.end_date,
            reference,
        )
    }
}
