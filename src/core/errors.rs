use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, validation, and storage layers.
#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Contract violation: {0}")]
    ContractViolation(String),
    #[error("Expense not found: {0}")]
    NotFound(u64),
    #[error("No expenses recorded")]
    Empty,
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, ExpenseError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("{0} action(s) failed")]
    ActionsFailed(usize),
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::StorageError(err.to_string())
    }
}
