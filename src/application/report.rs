use crate::domain::entities::report::{
    ComparisonPoint, ImportReport, PolicyEvent, PortDistributionPoint,
};
use crate::domain::entities::snapshot::ImportSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::domain::values::growth::percent_change;
use crate::domain::values::series_kind::SeriesKind;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::sync::Arc;

/// Offset back to the year-ago comparable.
const YEAR_OFFSET_DAYS: i64 = 365;
/// Offset back to the month-ago comparable.
const MONTH_OFFSET_DAYS: i64 = 30;
/// Tolerance window around either offset; observations skip weekends and
/// holidays, so an exact-date lookup would miss most comparables.
const COMPARABLE_WINDOW_DAYS: u32 = 7;

/// Assembles the full soybean-import report for a query date: the reference
/// snapshot's raw fields, YoY/MoM deltas against tolerance-window comparables,
/// the two-calendar-year comparison chart, the port distribution, and the
/// fixed policy-context annotations.
pub struct ReportUseCase {
    store: Arc<dyn SnapshotStore>,
    policy_events: Vec<PolicyEvent>,
}

impl ReportUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            policy_events: policy_events(),
        }
    }

    pub fn execute(&self, as_of: Option<NaiveDate>) -> Result<ImportReport, DomainError> {
        let reference = match self.store.latest(as_of)? {
            Some(snapshot) => snapshot,
            None => {
                tracing::warn!("no import snapshots available, returning empty report");
                return Ok(ImportReport::empty(
                    Utc::now().date_naive(),
                    self.policy_events.clone(),
                ));
            }
        };

        // Comparables are best-effort: a missing one leaves its delta fields
        // absent rather than failing the report.
        let year_ago = self
            .store
            .near(reference.date - Duration::days(YEAR_OFFSET_DAYS), COMPARABLE_WINDOW_DAYS)?;
        let month_ago = self
            .store
            .near(reference.date - Duration::days(MONTH_OFFSET_DAYS), COMPARABLE_WINDOW_DAYS)?;

        let monthly_comparison = self.build_comparison(&reference);
        let port_distribution = reference
            .port_details
            .iter()
            .map(|detail| PortDistributionPoint {
                port: detail.port.clone(),
                value: detail.current,
                tag: "current".to_string(),
            })
            .collect();

        let now = Utc::now();
        let mut report = ImportReport {
            date: reference.date,
            current_shipment: reference.current_shipment,
            forecast_shipment: reference.forecast_shipment,
            forecast_next_shipment: reference.forecast_next_shipment,
            current_arrival: reference.current_arrival,
            next_arrival: reference.next_arrival,
            current_month_arrival: reference.current_month_arrival,
            next_month_arrival: reference.next_month_arrival,
            shipment_forecast_diff: reference.current_shipment - reference.forecast_shipment,
            // Deliberately mixes current-month actual against next-period
            // forecast; kept exactly as the upstream dataset defines it.
            arrival_forecast_diff: reference.current_month_arrival - reference.next_arrival,
            current_shipment_yoy: None,
            forecast_shipment_yoy: None,
            current_arrival_yoy: None,
            next_arrival_yoy: None,
            current_shipment_mom: None,
            forecast_shipment_mom: None,
            current_arrival_mom: None,
            monthly_comparison,
            port_distribution,
            port_details: reference.port_details.clone(),
            customs_details: reference.customs_details.clone(),
            policy_events: self.policy_events.clone(),
            created_at: now,
            updated_at: now,
        };

        if let Some(prev) = &year_ago {
            report.current_shipment_yoy =
                Some(percent_change(reference.current_shipment, prev.current_shipment));
            report.forecast_shipment_yoy =
                Some(percent_change(reference.forecast_shipment, prev.forecast_shipment));
            report.current_arrival_yoy =
                Some(percent_change(reference.current_arrival, prev.current_arrival));
            report.next_arrival_yoy =
                Some(percent_change(reference.next_arrival, prev.next_arrival));
        }

        // Next-month arrival has no MoM counterpart; only these three series
        // carry a month-over-month delta.
        if let Some(prev) = &month_ago {
            report.current_shipment_mom =
                Some(percent_change(reference.current_shipment, prev.current_shipment));
            report.forecast_shipment_mom =
                Some(percent_change(reference.forecast_shipment, prev.forecast_shipment));
            report.current_arrival_mom =
                Some(percent_change(reference.current_arrival, prev.current_arrival));
        }

        tracing::info!(date = %reference.date, "assembled import report");
        Ok(report)
    }

    /// Chart data spanning Jan 1 of the prior calendar year through Dec 31 of
    /// the reference year: four points per snapshot, in a fixed series order
    /// so chart rendering is reproducible. Non-critical; any failure here
    /// degrades to an empty sequence instead of dropping the report.
    fn build_comparison(&self, reference: &ImportSnapshot) -> Vec<ComparisonPoint> {
        let year = reference.date.year();
        let Some(from) = NaiveDate::from_ymd_opt(year - 1, 1, 1) else {
            return Vec::new();
        };
        let Some(to) = NaiveDate::from_ymd_opt(year, 12, 31) else {
            return Vec::new();
        };

        match self.store.range_ascending(from, to) {
            Ok(snapshots) => snapshots
                .iter()
                .flat_map(|snapshot| {
                    let label = snapshot.date.format("%Y-%m-%d").to_string();
                    [
                        (snapshot.current_shipment, SeriesKind::ActualShipment),
                        (snapshot.forecast_shipment, SeriesKind::ForecastShipment),
                        (snapshot.current_arrival, SeriesKind::ActualArrival),
                        (snapshot.next_arrival, SeriesKind::ForecastArrival),
                    ]
                    .map(|(value, kind)| ComparisonPoint {
                        month: label.clone(),
                        value,
                        kind,
                    })
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build comparison chart, degrading to empty");
                Vec::new()
            }
        }
    }
}

/// The curated policy-context table attached to every report. Manually
/// maintained reference data, not derived from snapshots.
fn policy_events() -> Vec<PolicyEvent> {
    [
        (
            "2024-01-15",
            "US-China phase-one trade agreement compliance review",
            "May shift soybean import quotas and tariff policy",
            "trade_policy",
        ),
        (
            "2024-02-01",
            "Brazilian soybean harvest season begins",
            "Rising export supply, downward price pressure expected",
            "supply_factor",
        ),
        (
            "2024-03-10",
            "Domestic crushing-plant subsidy adjustment",
            "Changes crush margins and may dampen purchasing appetite",
            "industry_policy",
        ),
        (
            "2024-04-01",
            "International soybean futures volatility",
            "Traders increasingly holding back on new bookings",
            "market_factor",
        ),
    ]
    .into_iter()
    .map(|(date, event, impact, category)| PolicyEvent {
        date: date.to_string(),
        event: event.to_string(),
        impact: impact.to_string(),
        category: category.to_string(),
    })
    .collect()
}
