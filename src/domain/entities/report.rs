use crate::domain::values::series_kind::SeriesKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::{CustomsDetail, PortDetail};

/// One plotted observation in a comparison chart. `month` carries the period
/// label exactly as rendered (full date in the report chart, year-month in the
/// standalone comparison endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub month: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

/// One slice of the port-distribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortDistributionPoint {
    pub port: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub tag: String,
}

/// Static curated policy-context annotation. Never derived from snapshot
/// data; attached to every report as fixed reference context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEvent {
    pub date: String,
    pub event: String,
    pub impact: String,
    pub category: String,
}

/// The fully assembled, request-scoped soybean-import report.
///
/// Delta fields are `None` when no comparable prior snapshot exists within
/// the lookup window: "no data" stays distinguishable from "no change".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub date: NaiveDate,

    pub current_shipment: f64,
    pub forecast_shipment: f64,
    pub forecast_next_shipment: f64,
    pub current_arrival: f64,
    pub next_arrival: f64,
    pub current_month_arrival: f64,
    pub next_month_arrival: f64,

    pub shipment_forecast_diff: f64,
    pub arrival_forecast_diff: f64,

    pub current_shipment_yoy: Option<f64>,
    pub forecast_shipment_yoy: Option<f64>,
    pub current_arrival_yoy: Option<f64>,
    pub next_arrival_yoy: Option<f64>,

    pub current_shipment_mom: Option<f64>,
    pub forecast_shipment_mom: Option<f64>,
    pub current_arrival_mom: Option<f64>,

    pub monthly_comparison: Vec<ComparisonPoint>,
    pub port_distribution: Vec<PortDistributionPoint>,
    pub port_details: Vec<PortDetail>,
    pub customs_details: Vec<CustomsDetail>,
    pub policy_events: Vec<PolicyEvent>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ImportReport {
    /// The defined degenerate output for an empty series: all-zero numeric
    /// fields, empty detail sequences, fixed policy events. Not an error.
    pub fn empty(date: NaiveDate, policy_events: Vec<PolicyEvent>) -> Self {
        let now = Utc::now();
        Self {
            date,
            current_shipment: 0.0,
            forecast_shipment: 0.0,
            forecast_next_shipment: 0.0,
            current_arrival: 0.0,
            next_arrival: 0.0,
            current_month_arrival: 0.0,
            next_month_arrival: 0.0,
            shipment_forecast_diff: 0.0,
            arrival_forecast_diff: 0.0,
            current_shipment_yoy: None,
            forecast_shipment_yoy: None,
            current_arrival_yoy: None,
            next_arrival_yoy: None,
            current_shipment_mom: None,
            forecast_shipment_mom: None,
            current_arrival_mom: None,
            monthly_comparison: Vec::new(),
            port_distribution: Vec::new(),
            port_details: Vec::new(),
            customs_details: Vec::new(),
            policy_events,
            created_at: now,
            updated_at: now,
        }
    }
}
