#![doc(test(attr(deny(warnings))))]

//! Expense Core records one-off and recurring expenses and computes how much
//! each has accrued as of a given date.

pub mod cli;
pub mod config;
pub mod core;
pub mod ledger;
pub mod storage;
pub mod utils;

/// Initializes global tracing and emits a startup debug log.
pub fn init(verbose: bool) {
    utils::init_tracing(verbose);
    tracing::debug!("Expense Core tracing initialized.");
}
