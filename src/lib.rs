pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;

use crate::application::comparison::ComparisonUseCase;
use crate::application::ingest::IngestUseCase;
use crate::application::report::ReportUseCase;
use crate::domain::entities::report::{ComparisonPoint, ImportReport};
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::infrastructure::feeds::{Feed, FeedResult};
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::snapshot_repo::SqliteSnapshotStore;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::sync::Arc;

/// The analytics service the CLI and HTTP layers talk to. Owns the store's
/// connection lifecycle and wires the use cases; callers never touch the
/// database directly.
pub struct GrainTrack {
    report_uc: ReportUseCase,
    comparison_uc: ComparisonUseCase,
    ingest_uc: IngestUseCase,
}

impl std::fmt::Debug for GrainTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrainTrack").finish_non_exhaustive()
    }
}

impl GrainTrack {
    /// Open (or create) the SQLite store at `db_path` and run migrations.
    /// A connection that cannot be established is a `StoreUnavailable`
    /// failure, the only error this service ever raises for infrastructure.
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::StoreUnavailable(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;

        let store: Arc<dyn SnapshotStore> = Arc::new(SqliteSnapshotStore::new(conn));
        Ok(Self::with_store(store))
    }

    /// Inject any store implementation. This is the seam tests use and the
    /// reason no process-wide connection singleton exists.
    pub fn with_store(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            report_uc: ReportUseCase::new(store.clone()),
            comparison_uc: ComparisonUseCase::new(store.clone()),
            ingest_uc: IngestUseCase::new(store),
        }
    }

    /// Build the full import report as of the given date (or the newest
    /// observation when omitted).
    pub fn report(&self, as_of: Option<NaiveDate>) -> Result<ImportReport, DomainError> {
        self.report_uc.execute(as_of)
    }

    /// Month-level comparison series for the standalone chart endpoint.
    pub fn monthly_comparison(&self, as_of: Option<NaiveDate>) -> Vec<ComparisonPoint> {
        self.comparison_uc.execute(as_of)
    }

    /// Run the given feeds and append their snapshots to the store.
    pub async fn ingest(&self, feeds: &[Arc<dyn Feed>]) -> Result<Vec<FeedResult>, DomainError> {
        self.ingest_uc.execute(feeds).await
    }
}
