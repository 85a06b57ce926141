mod common;

use async_trait::async_trait;
use common::{date, setup, snapshot};
use graintrack::domain::entities::snapshot::ImportSnapshot;
use graintrack::domain::ports::snapshot_store::SnapshotStore;
use graintrack::infrastructure::feeds::{Feed, FeedError};
use std::sync::Arc;

struct FixedFeed {
    name: String,
    snapshots: Vec<ImportSnapshot>,
}

#[async_trait]
impl Feed for FixedFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<ImportSnapshot>, FeedError> {
        Ok(self.snapshots.clone())
    }
}

struct BrokenFeed;

#[async_trait]
impl Feed for BrokenFeed {
    fn name(&self) -> &str {
        "broken"
    }

    async fn fetch(&self) -> Result<Vec<ImportSnapshot>, FeedError> {
        Err(FeedError::Network("connection refused".into()))
    }
}

#[tokio::test]
async fn test_ingest_appends_and_dedups_by_date() {
    let (service, store) = setup();
    store.insert(&snapshot(date(2024, 6, 1), 100.0)).unwrap();

    let feed: Arc<dyn Feed> = Arc::new(FixedFeed {
        name: "fixture".into(),
        snapshots: vec![
            snapshot(date(2024, 6, 1), 999.0), // already present
            snapshot(date(2024, 6, 8), 110.0),
            snapshot(date(2024, 6, 15), 120.0),
        ],
    });

    let results = service.ingest(&[feed]).await.unwrap();
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.feed_name, "fixture");
    assert_eq!(result.snapshots_fetched, 3);
    assert_eq!(result.snapshots_added, 2);
    assert_eq!(result.snapshots_skipped, 1);
    assert!(result.errors.is_empty());

    // The pre-existing observation was not overwritten.
    let range = store
        .range_ascending(date(2024, 6, 1), date(2024, 6, 30))
        .unwrap();
    assert_eq!(range.len(), 3);
    assert_eq!(range[0].current_shipment, 100.0);
}

#[tokio::test]
async fn test_rerunning_a_feed_is_idempotent() {
    let (service, store) = setup();
    let feed: Arc<dyn Feed> = Arc::new(FixedFeed {
        name: "fixture".into(),
        snapshots: vec![snapshot(date(2024, 6, 8), 110.0)],
    });

    let first = service.ingest(&[feed.clone()]).await.unwrap();
    assert_eq!(first[0].snapshots_added, 1);

    let second = service.ingest(&[feed]).await.unwrap();
    assert_eq!(second[0].snapshots_added, 0);
    assert_eq!(second[0].snapshots_skipped, 1);

    assert_eq!(
        store
            .range_ascending(date(2024, 6, 1), date(2024, 6, 30))
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_invalid_snapshot_is_recorded_but_batch_continues() {
    let (service, store) = setup();
    let mut bad = snapshot(date(2024, 6, 8), 110.0);
    bad.current_arrival = -1.0;

    let feed: Arc<dyn Feed> = Arc::new(FixedFeed {
        name: "fixture".into(),
        snapshots: vec![bad, snapshot(date(2024, 6, 15), 120.0)],
    });

    let results = service.ingest(&[feed]).await.unwrap();
    assert_eq!(results[0].snapshots_added, 1);
    assert_eq!(results[0].errors.len(), 1);
    assert!(results[0].errors[0].contains("2024-06-08"));

    let kept = store.latest(None).unwrap().unwrap();
    assert_eq!(kept.date, date(2024, 6, 15));
}

#[tokio::test]
async fn test_feed_failure_is_isolated_per_feed() {
    let (service, store) = setup();
    let broken: Arc<dyn Feed> = Arc::new(BrokenFeed);
    let working: Arc<dyn Feed> = Arc::new(FixedFeed {
        name: "fixture".into(),
        snapshots: vec![snapshot(date(2024, 6, 8), 110.0)],
    });

    let results = service.ingest(&[broken, working]).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].feed_name, "broken");
    assert_eq!(results[0].snapshots_fetched, 0);
    assert_eq!(results[0].errors.len(), 1);
    assert_eq!(results[1].snapshots_added, 1);

    assert!(store.latest(None).unwrap().is_some());
}
