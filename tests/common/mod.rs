#![allow(dead_code)]

use assert_cmd::Command;
use expense_core::storage::JsonStorage;
use tempfile::TempDir;

pub const BIN_NAME: &str = "expense_cli";
pub const PINNED_TODAY: &str = "2025-06-01";

/// Creates a store backed by a unique directory; keep the guard alive for the test.
pub fn setup_store() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage =
        JsonStorage::new(Some(temp.path().to_path_buf())).expect("create json storage backend");
    (storage, temp)
}

/// Binary invocation isolated to `home` with a pinned reference date.
pub fn cli_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_CORE_HOME", home.path())
        .env("EXPENSE_CORE_TODAY", PINNED_TODAY)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
