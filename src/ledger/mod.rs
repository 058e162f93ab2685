//! Expense domain models and the accrual engine.

pub mod accrual;
pub mod category;
pub mod expense;
pub mod recurrence;
pub mod window;

pub use accrual::AccrualEngine;
pub use category::Category;
pub use expense::ExpenseRecord;
pub use recurrence::{days_in_month, Recurrence};
pub use window::DateWindow;
