use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::ExpenseError;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const HOME_ENV: &str = "EXPENSE_CORE_HOME";
const STORE_FILE: &str = "expenses.json";
const CONFIG_FILE: &str = "config.json";

/// Resolves on-disk locations for the store and configuration.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `$EXPENSE_CORE_HOME`, else `~/.expense_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn store_file_in(base: &Path) -> PathBuf {
        base.join(STORE_FILE)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), ExpenseError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
