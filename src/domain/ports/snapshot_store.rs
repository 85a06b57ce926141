use crate::domain::entities::snapshot::ImportSnapshot;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

/// Read/append surface over the persisted import-snapshot time series.
///
/// Absence of data is never an error: `latest` and `near` return `Ok(None)`
/// and `range_ascending` returns an empty vec for empty windows. Errors are
/// reserved for the store itself being unreachable or corrupt.
pub trait SnapshotStore: Send + Sync {
    /// The snapshot with the maximum date, restricted to dates on or before
    /// `as_of` when one is given.
    fn latest(&self, as_of: Option<NaiveDate>) -> Result<Option<ImportSnapshot>, DomainError>;

    /// The first snapshot dated within `window_days` of `target`, i.e. in
    /// `[target - window_days, target + window_days)`, ascending. Used to
    /// locate "about a year ago" / "about a month ago" comparables without
    /// exact calendar alignment: observation cadence skips weekends and
    /// holidays, and leap days shift a 365-day offset past the prior
    /// observation, so the tolerance must extend both ways.
    fn near(
        &self,
        target: NaiveDate,
        window_days: u32,
    ) -> Result<Option<ImportSnapshot>, DomainError>;

    /// All snapshots dated within `[from, to]`, ascending by date.
    fn range_ascending(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ImportSnapshot>, DomainError>;

    /// Append-only ingestion. Returns `false` when a snapshot for the same
    /// date already exists; existing rows are never overwritten.
    fn insert(&self, snapshot: &ImportSnapshot) -> Result<bool, DomainError>;
}
