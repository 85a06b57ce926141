use super::{Feed, FeedError};
use crate::domain::entities::snapshot::{CustomsDetail, ImportSnapshot, PortDetail};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Market-data vendor feed for weekly soybean shipment/arrival observations.
///
/// Expects a JSON array of rows from `{base_url}/agri/soybean/imports`,
/// authenticated with a bearer token. Rows that fail to parse are skipped
/// individually so one bad observation cannot sink a whole batch.
pub struct VendorFeed {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl VendorFeed {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Build from environment: `GRAINTRACK_VENDOR_URL` and
    /// `GRAINTRACK_VENDOR_TOKEN`.
    pub fn from_env() -> Result<Self, FeedError> {
        let base_url = std::env::var("GRAINTRACK_VENDOR_URL")
            .map_err(|_| FeedError::Config("GRAINTRACK_VENDOR_URL not set".into()))?;
        let token = std::env::var("GRAINTRACK_VENDOR_TOKEN")
            .map_err(|_| FeedError::Config("GRAINTRACK_VENDOR_TOKEN not set".into()))?;
        Ok(Self::new(base_url, token))
    }
}

#[derive(Debug, serde::Deserialize)]
struct VendorRow {
    date: String,
    #[serde(default)]
    current_shipment: f64,
    #[serde(default)]
    forecast_shipment: f64,
    #[serde(default)]
    forecast_next_shipment: f64,
    #[serde(default)]
    current_arrival: f64,
    #[serde(default)]
    next_arrival: f64,
    #[serde(default)]
    current_month_arrival: f64,
    #[serde(default)]
    next_month_arrival: f64,
    #[serde(default)]
    port_details: Vec<PortDetail>,
    #[serde(default)]
    customs_details: Vec<CustomsDetail>,
}

impl VendorRow {
    fn into_snapshot(self) -> Result<ImportSnapshot, FeedError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| FeedError::Parse(format!("bad date '{}': {e}", self.date)))?;
        let snapshot = ImportSnapshot::new(
            date,
            self.current_shipment,
            self.forecast_shipment,
            self.forecast_next_shipment,
            self.current_arrival,
            self.next_arrival,
            self.current_month_arrival,
            self.next_month_arrival,
            self.port_details,
            self.customs_details,
        );
        snapshot
            .validate()
            .map_err(|e| FeedError::Parse(e.to_string()))?;
        Ok(snapshot)
    }
}

#[async_trait]
impl Feed for VendorFeed {
    fn name(&self) -> &str {
        "vendor"
    }

    async fn fetch(&self) -> Result<Vec<ImportSnapshot>, FeedError> {
        let url = format!("{}/agri/soybean/imports", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Network(format!(
                "vendor returned HTTP {}",
                response.status()
            )));
        }

        let rows: Vec<VendorRow> = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        let mut snapshots = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_snapshot() {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => tracing::warn!(error = %e, "skipping malformed vendor row"),
            }
        }
        Ok(snapshots)
    }
}
