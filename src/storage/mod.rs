pub mod json_backend;

use serde::{Deserialize, Serialize};

use crate::{core::errors::ExpenseError, ledger::ExpenseRecord};

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Persisted expense paired with its store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredExpense {
    pub id: u64,
    #[serde(flatten)]
    pub record: ExpenseRecord,
}

/// Abstraction over persistence backends capable of storing expense records.
pub trait StorageBackend: Send + Sync {
    /// Persists a record and returns it with its newly assigned id.
    fn add(&self, record: ExpenseRecord) -> Result<StoredExpense>;

    /// Deletes the record with `id`, failing with `NotFound` when absent.
    fn remove(&self, id: u64) -> Result<u64>;

    /// All records in insertion order.
    fn list(&self) -> Result<Vec<StoredExpense>>;
}

pub use json_backend::{JsonStorage, STORE_SCHEMA_VERSION};
