use chrono::NaiveDate;

use crate::{
    core::errors::{ExpenseError, Result},
    ledger::Category,
    storage::StoredExpense,
};

/// A stored expense together with what it has accrued.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub expense: StoredExpense,
    pub accumulated: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    /// Percentage of the grand total, `0.0` when nothing was spent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub totals: Vec<CategoryTotal>,
    pub grand_total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Every expense with its accrued amount, newest first.
    pub fn history(expenses: &[StoredExpense], reference: NaiveDate) -> Result<Vec<HistoryRow>> {
        if expenses.is_empty() {
            return Err(ExpenseError::Empty);
        }
        let mut rows = expenses
            .iter()
            .map(|expense| -> Result<HistoryRow> {
                Ok(HistoryRow {
                    accumulated: expense.record.total_amount(reference)?,
                    expense: expense.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.reverse();
        Ok(rows)
    }

    /// Accrued totals for all seven categories in reporting order.
    pub fn summary(expenses: &[StoredExpense], reference: NaiveDate) -> Result<ExpenseSummary> {
        if expenses.is_empty() {
            return Err(ExpenseError::Empty);
        }
        let mut sums = vec![0.0_f64; Category::ALL.len()];
        for expense in expenses {
            sums[expense.record.category.index()] += expense.record.total_amount(reference)?;
        }

        let grand_total: f64 = sums.iter().sum();
        let totals = Category::ALL
            .iter()
            .zip(sums)
            .map(|(category, total)| CategoryTotal {
                category: *category,
                total,
                share: if grand_total > 0.0 {
                    total * 100.0 / grand_total
                } else {
                    0.0
                },
            })
            .collect();

        Ok(ExpenseSummary {
            totals,
            grand_total,
        })
    }
}
