use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    core::{
        errors::ExpenseError,
        utils::{ensure_dir, PathResolver},
    },
    ledger::ExpenseRecord,
};

use super::{Result, StorageBackend, StoredExpense};

const TMP_SUFFIX: &str = "tmp";

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    schema_version: u32,
    next_id: u64,
    expenses: Vec<StoredExpense>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            schema_version: STORE_SCHEMA_VERSION,
            next_id: 1,
            expenses: Vec::new(),
        }
    }
}

/// Stores every expense in a single JSON document.
#[derive(Clone, Debug)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Opens the store under `root` (or the default data directory).
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::store_file_in(&base),
        })
    }

    /// Opens the store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&data)?;
        if document.schema_version > STORE_SCHEMA_VERSION {
            return Err(ExpenseError::StorageError(format!(
                "expense store `{}` is from a newer schema version",
                self.path.display()
            )));
        }
        Ok(document)
    }

    fn write(&self, document: &StoreDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn add(&self, record: ExpenseRecord) -> Result<StoredExpense> {
        let mut document = self.read()?;
        let stored = StoredExpense {
            id: document.next_id,
            record,
        };
        document.next_id += 1;
        document.expenses.push(stored.clone());
        self.write(&document)?;
        info!(id = stored.id, category = %stored.record.category, "expense stored");
        Ok(stored)
    }

    fn remove(&self, id: u64) -> Result<u64> {
        let mut document = self.read()?;
        let before = document.expenses.len();
        document.expenses.retain(|expense| expense.id != id);
        if document.expenses.len() == before {
            debug!(id, "no expense matched removal");
            return Err(ExpenseError::NotFound(id));
        }
        self.write(&document)?;
        info!(id, "expense removed");
        Ok(id)
    }

    fn list(&self) -> Result<Vec<StoredExpense>> {
        Ok(self.read()?.expenses)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(amount: f64) -> ExpenseRecord {
        ExpenseRecord::new(
            amount,
            Category::Other,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/data/expenses.json"));
        assert_eq!(tmp, PathBuf::from("/data/expenses.json.tmp"));
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
        let first = storage.add(record(1.0)).unwrap();
        storage.remove(first.id).unwrap();
        let second = storage.add(record(2.0)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn rejects_newer_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("expenses.json");
        fs::write(&path, r#"{"schema_version":99,"next_id":1,"expenses":[]}"#).unwrap();
        let storage = JsonStorage::at_path(&path).unwrap();
        assert!(matches!(
            storage.list(),
            Err(ExpenseError::StorageError(_))
        ));
    }
}
