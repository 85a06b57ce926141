pub mod vendor;

use crate::domain::entities::snapshot::ImportSnapshot;
use async_trait::async_trait;

/// An upstream data source that produces import snapshots ready for
/// ingestion. The store's append-only dedup (one snapshot per date) makes
/// re-running a feed safe.
#[async_trait]
pub trait Feed: Send + Sync {
    /// Human-readable name of this feed.
    fn name(&self) -> &str;

    /// Fetch the source and return well-formed snapshots.
    async fn fetch(&self) -> Result<Vec<ImportSnapshot>, FeedError>;
}

#[derive(Debug)]
pub enum FeedError {
    /// HTTP or network error
    Network(String),
    /// Response parsing error
    Parse(String),
    /// Configuration error (missing base URL, token, etc.)
    Config(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "Network error: {msg}"),
            FeedError::Parse(msg) => write!(f, "Parse error: {msg}"),
            FeedError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Outcome of one feed run: how many snapshots were new vs already present.
#[derive(Debug, serde::Serialize)]
pub struct FeedResult {
    pub feed_name: String,
    pub snapshots_fetched: usize,
    pub snapshots_added: usize,
    pub snapshots_skipped: usize,
    pub errors: Vec<String>,
}
