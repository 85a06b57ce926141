//! Shared test helpers.
#![allow(dead_code)]

use chrono::NaiveDate;
use graintrack::domain::entities::snapshot::{CustomsDetail, ImportSnapshot, PortDetail};
use graintrack::infrastructure::sqlite::migrations::run_migrations;
use graintrack::infrastructure::sqlite::snapshot_repo::SqliteSnapshotStore;
use graintrack::GrainTrack;
use rusqlite::Connection;
use std::sync::Arc;

pub fn memory_store() -> Arc<SqliteSnapshotStore> {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    Arc::new(SqliteSnapshotStore::new(conn))
}

/// Service + store pair over the same in-memory database.
pub fn setup() -> (GrainTrack, Arc<SqliteSnapshotStore>) {
    let store = memory_store();
    (GrainTrack::with_store(store.clone()), store)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A snapshot whose fields are all derived from one shipment figure, so
/// assertions can tell the series apart without spelling every field out.
pub fn snapshot(on: NaiveDate, shipment: f64) -> ImportSnapshot {
    ImportSnapshot::new(
        on,
        shipment,
        shipment + 10.0,
        shipment + 20.0,
        shipment + 30.0,
        shipment + 40.0,
        shipment + 50.0,
        shipment + 60.0,
        Vec::new(),
        Vec::new(),
    )
}

pub fn snapshot_with_details(on: NaiveDate, shipment: f64) -> ImportSnapshot {
    let mut s = snapshot(on, shipment);
    s.port_details = vec![
        PortDetail {
            port: "Qingdao".into(),
            current: 120.0,
            historical: 100.0,
        },
        PortDetail {
            port: "Rizhao".into(),
            current: 80.0,
            historical: 90.0,
        },
    ];
    s.customs_details = vec![CustomsDetail {
        region: "Shandong".into(),
        metric: "declared_volume".into(),
        value: 200.0,
    }];
    s
}
