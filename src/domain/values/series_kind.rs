use serde::{Deserialize, Serialize};

/// Tag for one series in the shipment/arrival comparison charts. Serde is the
/// only wire format; the snake_case tags land under the payload's `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    ActualShipment,
    ForecastShipment,
    ActualArrival,
    ForecastArrival,
}
