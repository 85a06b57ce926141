mod common;

use common::{date, memory_store, snapshot, snapshot_with_details};
use graintrack::domain::error::DomainError;
use graintrack::domain::ports::snapshot_store::SnapshotStore;
use graintrack::infrastructure::sqlite::migrations::run_migrations;
use graintrack::infrastructure::sqlite::snapshot_repo::SqliteSnapshotStore;
use graintrack::GrainTrack;
use rusqlite::Connection;
use std::sync::Arc;

#[test]
fn test_latest_on_empty_series_is_none() {
    let store = memory_store();
    assert!(store.latest(None).unwrap().is_none());
}

#[test]
fn test_latest_returns_maximum_date() {
    let store = memory_store();
    store.insert(&snapshot(date(2024, 3, 1), 10.0)).unwrap();
    store.insert(&snapshot(date(2024, 6, 1), 20.0)).unwrap();
    store.insert(&snapshot(date(2024, 4, 1), 30.0)).unwrap();

    let latest = store.latest(None).unwrap().unwrap();
    assert_eq!(latest.date, date(2024, 6, 1));
    assert_eq!(latest.current_shipment, 20.0);
}

#[test]
fn test_latest_respects_as_of_bound() {
    let store = memory_store();
    store.insert(&snapshot(date(2024, 3, 1), 10.0)).unwrap();
    store.insert(&snapshot(date(2024, 6, 1), 20.0)).unwrap();

    let bounded = store.latest(Some(date(2024, 5, 1))).unwrap().unwrap();
    assert_eq!(bounded.date, date(2024, 3, 1));

    // Bound is inclusive.
    let exact = store.latest(Some(date(2024, 3, 1))).unwrap().unwrap();
    assert_eq!(exact.date, date(2024, 3, 1));

    assert!(store.latest(Some(date(2024, 2, 1))).unwrap().is_none());
}

#[test]
fn test_near_finds_comparable_inside_window() {
    let store = memory_store();
    store.insert(&snapshot(date(2023, 6, 10), 100.0)).unwrap();

    // Target a few days past the observation, as a 365-day offset across a
    // leap year does.
    let hit = store.near(date(2023, 6, 13), 7).unwrap().unwrap();
    assert_eq!(hit.date, date(2023, 6, 10));

    let forward = store.near(date(2023, 6, 5), 7).unwrap().unwrap();
    assert_eq!(forward.date, date(2023, 6, 10));
}

#[test]
fn test_near_misses_outside_window() {
    let store = memory_store();
    store.insert(&snapshot(date(2023, 6, 10), 100.0)).unwrap();

    assert!(store.near(date(2023, 6, 20), 7).unwrap().is_none());
    assert!(store.near(date(2023, 5, 20), 7).unwrap().is_none());
    // Upper bound is exclusive: [target-7, target+7) with target 06-03
    // reaches 06-09 at most.
    assert!(store.near(date(2023, 6, 3), 7).unwrap().is_none());
}

#[test]
fn test_near_prefers_earliest_match() {
    let store = memory_store();
    store.insert(&snapshot(date(2024, 5, 12), 1.0)).unwrap();
    store.insert(&snapshot(date(2024, 5, 15), 2.0)).unwrap();

    let hit = store.near(date(2024, 5, 14), 7).unwrap().unwrap();
    assert_eq!(hit.date, date(2024, 5, 12));
}

#[test]
fn test_range_ascending_is_inclusive_and_ordered() {
    let store = memory_store();
    store.insert(&snapshot(date(2024, 1, 31), 3.0)).unwrap();
    store.insert(&snapshot(date(2024, 1, 1), 1.0)).unwrap();
    store.insert(&snapshot(date(2024, 1, 15), 2.0)).unwrap();
    store.insert(&snapshot(date(2024, 2, 1), 4.0)).unwrap();

    let range = store
        .range_ascending(date(2024, 1, 1), date(2024, 1, 31))
        .unwrap();
    let dates: Vec<_> = range.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 1), date(2024, 1, 15), date(2024, 1, 31)]
    );
}

#[test]
fn test_insert_is_append_only_per_date() {
    let store = memory_store();
    assert!(store.insert(&snapshot(date(2024, 6, 1), 100.0)).unwrap());
    // Same date again: ignored, original row wins.
    assert!(!store.insert(&snapshot(date(2024, 6, 1), 999.0)).unwrap());

    let kept = store.latest(None).unwrap().unwrap();
    assert_eq!(kept.current_shipment, 100.0);
}

#[test]
fn test_insert_rejects_negative_quantities() {
    let store = memory_store();
    let mut bad = snapshot(date(2024, 6, 1), 100.0);
    bad.next_arrival = -5.0;

    let err = store.insert(&bad).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(store.latest(None).unwrap().is_none());
}

#[test]
fn test_detail_sequences_roundtrip() {
    let store = memory_store();
    let original = snapshot_with_details(date(2024, 6, 1), 100.0);
    store.insert(&original).unwrap();

    let loaded = store.latest(None).unwrap().unwrap();
    assert_eq!(loaded.port_details, original.port_details);
    assert_eq!(loaded.customs_details, original.customs_details);
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("graintrack.db");
    let db_path = db_path.to_str().unwrap();

    {
        let conn = Connection::open(db_path).unwrap();
        run_migrations(&conn).unwrap();
        let store = SqliteSnapshotStore::new(conn);
        store.insert(&snapshot(date(2024, 6, 15), 100.0)).unwrap();
    }

    let service = GrainTrack::new(db_path).unwrap();
    let report = service.report(None).unwrap();
    assert_eq!(report.date, date(2024, 6, 15));
    assert_eq!(report.current_shipment, 100.0);
}

#[test]
fn test_service_open_on_bad_path_is_store_unavailable() {
    let err = GrainTrack::new("/nonexistent-dir/nested/graintrack.db").unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));
}

#[test]
fn test_store_coerces_to_trait_object() {
    // The facade takes any SnapshotStore; exercise the injection seam.
    let store: Arc<dyn SnapshotStore> = memory_store();
    store.insert(&snapshot(date(2024, 6, 1), 100.0)).unwrap();
    let service = GrainTrack::with_store(store);
    assert_eq!(service.report(None).unwrap().current_shipment, 100.0);
}
