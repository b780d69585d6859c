//! End-to-end store behavior over the CSV file backend.

#![cfg(feature = "csv")]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use doselog_domain::{EnvFactor, Entry, EntryPatch, Note, SubstanceKind};
use doselog_store::{CsvBackend, RecordStore, StoreError, SubstanceCatalog};
use tempfile::TempDir;

fn peanuts_entry() -> Entry {
    Entry {
        id: String::new(),
        entry_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        entry_time: NaiveTime::from_hms_opt(12, 15, 0).unwrap(),
        substance_kind: SubstanceKind::Food,
        substance_name: "Peanuts".to_string(),
        amount: "a handful".to_string(),
        post_dose_symptoms: vec!["Hives".to_string()],
        symptom_severity: "4".to_string(),
        environmental_factors: Vec::new(),
        remarks: String::new(),
    }
}

#[test]
fn create_update_delete_round_trip() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(CsvBackend::open(dir.path()).unwrap());
    let store = RecordStore::<Entry>::entries(backend);

    // Create assigns an id and the record shows up in list().
    let created = store.create(peanuts_entry()).unwrap();
    assert!(!created.id.is_empty());

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].substance_name, "Peanuts");
    assert_eq!(listed[0].symptom_severity, "4");

    // Update changes the patched field only and keeps the identity.
    store
        .update(
            &created.id,
            EntryPatch {
                symptom_severity: Some("7".to_string()),
                ..EntryPatch::default()
            },
        )
        .unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].symptom_severity, "7");
    assert_eq!(listed[0].substance_name, "Peanuts");

    // Delete empties the collection; a second delete is NotFound.
    store.delete(&created.id).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(
        store.delete(&created.id),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn tagged_factor_survives_create_then_list() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(CsvBackend::open(dir.path()).unwrap());
    let store = RecordStore::<Entry>::entries(backend);

    let mut record = peanuts_entry();
    record.environmental_factors = vec![EnvFactor::parse("High Stress: missed the bus")];
    let created = store.create(record).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].environmental_factors, created.environmental_factors);
    assert_eq!(
        listed[0].environmental_factors[0].to_string(),
        "High Stress: missed the bus"
    );
}

#[test]
fn notes_and_catalogs_share_one_backend() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(CsvBackend::open(dir.path()).unwrap());

    let notes = RecordStore::<Note>::notes(backend.clone());
    let stored = notes
        .create(Note {
            id: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            text: "slept badly".to_string(),
        })
        .unwrap();
    assert!(!stored.id.is_empty());

    let catalog = SubstanceCatalog::new(backend);
    catalog
        .add_if_absent(SubstanceKind::Supplement, "Magnesium")
        .unwrap();
    catalog
        .add_if_absent(SubstanceKind::Supplement, "Magnesium")
        .unwrap();

    assert_eq!(notes.list().unwrap().len(), 1);
    assert_eq!(catalog.list(SubstanceKind::Supplement).unwrap().len(), 1);
    assert!(dir.path().join("notes.csv").exists());
    assert!(dir.path().join("substances_supplement.csv").exists());
}

#[test]
fn records_survive_reopening_the_backend() {
    let dir = TempDir::new().unwrap();

    let created = {
        let backend = Arc::new(CsvBackend::open(dir.path()).unwrap());
        let store = RecordStore::<Entry>::entries(backend);
        store.create(peanuts_entry()).unwrap()
    };

    let backend = Arc::new(CsvBackend::open(dir.path()).unwrap());
    let store = RecordStore::<Entry>::entries(backend);
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}
