use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::infrastructure::feeds::{Feed, FeedResult};
use std::sync::Arc;

/// Runs feeds and appends their snapshots to the store. Dates that already
/// have a snapshot are counted as skipped, never overwritten.
pub struct IngestUseCase {
    store: Arc<dyn SnapshotStore>,
}

impl IngestUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, feeds: &[Arc<dyn Feed>]) -> Result<Vec<FeedResult>, DomainError> {
        let mut results = Vec::with_capacity(feeds.len());
        for feed in feeds {
            results.push(self.run_feed(feed.as_ref()).await?);
        }
        Ok(results)
    }

    async fn run_feed(&self, feed: &dyn Feed) -> Result<FeedResult, DomainError> {
        let mut result = FeedResult {
            feed_name: feed.name().to_string(),
            snapshots_fetched: 0,
            snapshots_added: 0,
            snapshots_skipped: 0,
            errors: Vec::new(),
        };

        let snapshots = match feed.fetch().await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!(feed = feed.name(), error = %e, "feed fetch failed");
                result.errors.push(e.to_string());
                return Ok(result);
            }
        };
        result.snapshots_fetched = snapshots.len();

        for snapshot in &snapshots {
            match self.store.insert(snapshot) {
                Ok(true) => result.snapshots_added += 1,
                Ok(false) => result.snapshots_skipped += 1,
                // A store outage aborts ingestion; a single invalid snapshot
                // is recorded and the rest of the batch continues.
                Err(DomainError::StoreUnavailable(msg)) => {
                    return Err(DomainError::StoreUnavailable(msg))
                }
                Err(e) => result.errors.push(format!("{}: {e}", snapshot.date)),
            }
        }

        tracing::info!(
            feed = feed.name(),
            added = result.snapshots_added,
            skipped = result.snapshots_skipped,
            "ingest complete"
        );
        Ok(result)
    }
}
