mod common;

use chrono::NaiveDate;
use expense_core::{
    core::errors::ExpenseError,
    ledger::{Category, ExpenseRecord, Recurrence},
    storage::{JsonStorage, StorageBackend},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly_rent() -> ExpenseRecord {
    ExpenseRecord::new(1200.0, Category::Household, date(2025, 1, 1))
        .unwrap()
        .with_recurrence(Recurrence::Monthly, Some(date(2025, 1, 1)), None)
        .with_description(Some("Rent".into()))
}

#[test]
fn records_survive_reopening_the_store() {
    let (storage, dir) = common::setup_store();
    let stored = storage.add(monthly_rent()).unwrap();
    assert_eq!(stored.id, 1);

    let reopened = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
    let records = reopened.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], stored);
    assert_eq!(
        records[0].record.total_amount(date(2025, 3, 15)).unwrap(),
        3600.0
    );
}

#[test]
fn list_preserves_insertion_order() {
    let (storage, _dir) = common::setup_store();
    for amount in [5.0, 7.5, 9.25] {
        let record = ExpenseRecord::new(amount, Category::FoodDining, date(2025, 2, 1)).unwrap();
        storage.add(record).unwrap();
    }
    let amounts: Vec<f64> = storage
        .list()
        .unwrap()
        .into_iter()
        .map(|stored| stored.record.base_amount)
        .collect();
    assert_eq!(amounts, vec![5.0, 7.5, 9.25]);
}

#[test]
fn removing_unknown_id_is_not_found() {
    let (storage, _dir) = common::setup_store();
    storage.add(monthly_rent()).unwrap();
    assert!(matches!(storage.remove(42), Err(ExpenseError::NotFound(42))));
    assert_eq!(storage.list().unwrap().len(), 1);
}

#[test]
fn store_file_is_human_readable_json() {
    let (storage, _dir) = common::setup_store();
    storage.add(monthly_rent()).unwrap();
    let json = std::fs::read_to_string(storage.path()).unwrap();
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"category\": \"Household\""));
    assert!(json.contains("\"recurrence\": \"monthly\""));
    assert!(!json.contains("end_date"));
}
