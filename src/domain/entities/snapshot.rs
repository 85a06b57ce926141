use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-port shipment volume for a single observation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortDetail {
    pub port: String,
    pub current: f64,
    pub historical: f64,
}

/// Per-customs-region metric for a single observation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDetail {
    pub region: String,
    pub metric: String,
    pub value: f64,
}

/// One dated observation of the tracked soybean-import metric bundle.
///
/// Snapshots are append-only: at most one per calendar date, immutable once
/// written. All volume fields are in ten-thousand tonnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSnapshot {
    pub date: NaiveDate,
    pub current_shipment: f64,
    pub forecast_shipment: f64,
    pub forecast_next_shipment: f64,
    pub current_arrival: f64,
    pub next_arrival: f64,
    pub current_month_arrival: f64,
    pub next_month_arrival: f64,
    pub port_details: Vec<PortDetail>,
    pub customs_details: Vec<CustomsDetail>,
    pub created_at: DateTime<Utc>,
}

impl ImportSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        current_shipment: f64,
        forecast_shipment: f64,
        forecast_next_shipment: f64,
        current_arrival: f64,
        next_arrival: f64,
        current_month_arrival: f64,
        next_month_arrival: f64,
        port_details: Vec<PortDetail>,
        customs_details: Vec<CustomsDetail>,
    ) -> Self {
        Self {
            date,
            current_shipment,
            forecast_shipment,
            forecast_next_shipment,
            current_arrival,
            next_arrival,
            current_month_arrival,
            next_month_arrival,
            port_details,
            customs_details,
            created_at: Utc::now(),
        }
    }

    /// Boundary validation: all tracked quantities are volumes and must be
    /// non-negative (and finite, so NaN cannot leak into delta math).
    pub fn validate(&self) -> Result<(), DomainError> {
        let quantities = [
            ("current_shipment", self.current_shipment),
            ("forecast_shipment", self.forecast_shipment),
            ("forecast_next_shipment", self.forecast_next_shipment),
            ("current_arrival", self.current_arrival),
            ("next_arrival", self.next_arrival),
            ("current_month_arrival", self.current_month_arrival),
            ("next_month_arrival", self.next_month_arrival),
        ];
        for (name, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "{name} must be a non-negative quantity, got {value}"
                )));
            }
        }
        for detail in &self.port_details {
            if detail.port.trim().is_empty() {
                return Err(DomainError::InvalidInput(
                    "port detail with empty port name".into(),
                ));
            }
        }
        for detail in &self.customs_details {
            if detail.region.trim().is_empty() {
                return Err(DomainError::InvalidInput(
                    "customs detail with empty region".into(),
                ));
            }
        }
        Ok(())
    }
}
