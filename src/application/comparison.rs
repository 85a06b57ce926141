use crate::domain::entities::report::ComparisonPoint;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::domain::values::series_kind::SeriesKind;
use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;

const MONTH_LABEL_FMT: &str = "%Y-%m";

/// Standalone month-level comparison series: the current month's newest
/// actual shipment, the next month's first forecast arrival, and the whole
/// prior calendar year of actual shipments. Chart-only data, so failures
/// degrade to an empty list rather than surfacing.
pub struct ComparisonUseCase {
    store: Arc<dyn SnapshotStore>,
}

impl ComparisonUseCase {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, as_of: Option<NaiveDate>) -> Vec<ComparisonPoint> {
        let today = as_of.unwrap_or_else(|| Utc::now().date_naive());
        match self.collect(today) {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build monthly comparison, degrading to empty");
                Vec::new()
            }
        }
    }

    fn collect(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ComparisonPoint>, crate::domain::error::DomainError> {
        let mut points = Vec::new();

        if let Some(first_of_month) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) {
            if let Some(current) = self
                .store
                .range_ascending(first_of_month, today)?
                .into_iter()
                .last()
            {
                points.push(ComparisonPoint {
                    month: current.date.format(MONTH_LABEL_FMT).to_string(),
                    value: current.current_shipment,
                    kind: SeriesKind::ActualShipment,
                });
            }
        }

        if let Some(next_month_start) = first_of_next_month(today) {
            let month_end = next_month_start + chrono::Duration::days(31);
            if let Some(forecast) = self
                .store
                .range_ascending(next_month_start, month_end)?
                .into_iter()
                .next()
            {
                points.push(ComparisonPoint {
                    month: forecast.date.format(MONTH_LABEL_FMT).to_string(),
                    value: forecast.next_arrival,
                    kind: SeriesKind::ForecastArrival,
                });
            }
        }

        let last_year = today.year() - 1;
        if let (Some(from), Some(to)) = (
            NaiveDate::from_ymd_opt(last_year, 1, 1),
            NaiveDate::from_ymd_opt(last_year, 12, 31),
        ) {
            for snapshot in self.store.range_ascending(from, to)? {
                points.push(ComparisonPoint {
                    month: snapshot.date.format(MONTH_LABEL_FMT).to_string(),
                    value: snapshot.current_shipment,
                    kind: SeriesKind::ActualShipment,
                });
            }
        }

        Ok(points)
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_next_month_rolls_year() {
        let dec = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(
            first_of_next_month(dec),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn test_first_of_next_month_mid_year() {
        let jun = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(
            first_of_next_month(jun),
            NaiveDate::from_ymd_opt(2024, 7, 1)
        );
    }
}
