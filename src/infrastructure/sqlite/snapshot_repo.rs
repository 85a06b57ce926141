use crate::domain::entities::snapshot::{CustomsDetail, ImportSnapshot, PortDetail};
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use chrono::{DateTime, Duration, NaiveDate};
use rusqlite::{params, Connection};
use std::sync::{Mutex, MutexGuard};

/// Column list shared by all SELECT queries.
const SELECT_COLS: &str = "date, current_shipment, forecast_shipment, forecast_next_shipment, \
     current_arrival, next_arrival, current_month_arrival, next_month_arrival, \
     port_details, customs_details, created_at";

const DATE_FMT: &str = "%Y-%m-%d";

pub struct SqliteSnapshotStore {
    conn: Mutex<Connection>,
}

impl SqliteSnapshotStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Scoped connection acquisition; the guard releases on every exit path.
    /// A poisoned lock means the store is no longer usable at all.
    fn acquire(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }

    fn row_to_snapshot(row: &rusqlite::Row) -> Result<ImportSnapshot, rusqlite::Error> {
        let date_str: String = row.get(0)?;
        let port_json: String = row.get(8)?;
        let customs_json: String = row.get(9)?;
        let created_str: String = row.get(10)?;

        let date = NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        let port_details: Vec<PortDetail> = serde_json::from_str(&port_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
        })?;
        let customs_details: Vec<CustomsDetail> =
            serde_json::from_str(&customs_json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    9,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

        Ok(ImportSnapshot {
            date,
            current_shipment: row.get(1)?,
            forecast_shipment: row.get(2)?,
            forecast_next_shipment: row.get(3)?,
            current_arrival: row.get(4)?,
            next_arrival: row.get(5)?,
            current_month_arrival: row.get(6)?,
            next_month_arrival: row.get(7)?,
            port_details,
            customs_details,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn latest(&self, as_of: Option<NaiveDate>) -> Result<Option<ImportSnapshot>, DomainError> {
        let conn = self.acquire()?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM import_snapshots \
             WHERE ?1 IS NULL OR date <= ?1 \
             ORDER BY date DESC LIMIT 1"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(
                params![as_of.map(|d| d.format(DATE_FMT).to_string())],
                Self::row_to_snapshot,
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn near(
        &self,
        target: NaiveDate,
        window_days: u32,
    ) -> Result<Option<ImportSnapshot>, DomainError> {
        let conn = self.acquire()?;
        let lower = target - Duration::days(i64::from(window_days));
        let upper = target + Duration::days(i64::from(window_days));
        let sql = format!(
            "SELECT {SELECT_COLS} FROM import_snapshots \
             WHERE date >= ?1 AND date < ?2 \
             ORDER BY date ASC LIMIT 1"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(
                params![
                    lower.format(DATE_FMT).to_string(),
                    upper.format(DATE_FMT).to_string()
                ],
                Self::row_to_snapshot,
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn range_ascending(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ImportSnapshot>, DomainError> {
        let conn = self.acquire()?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM import_snapshots \
             WHERE date >= ?1 AND date <= ?2 \
             ORDER BY date ASC"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let snapshots = stmt
            .query_map(
                params![
                    from.format(DATE_FMT).to_string(),
                    to.format(DATE_FMT).to_string()
                ],
                Self::row_to_snapshot,
            )
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(snapshots)
    }

    fn insert(&self, snapshot: &ImportSnapshot) -> Result<bool, DomainError> {
        snapshot.validate()?;
        let conn = self.acquire()?;
        // Append-only by date: an existing row for the date wins, silently.
        let changed = conn
            .execute(
                "INSERT OR IGNORE INTO import_snapshots (
                    date, current_shipment, forecast_shipment, forecast_next_shipment,
                    current_arrival, next_arrival, current_month_arrival, next_month_arrival,
                    port_details, customs_details, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    snapshot.date.format(DATE_FMT).to_string(),
                    snapshot.current_shipment,
                    snapshot.forecast_shipment,
                    snapshot.forecast_next_shipment,
                    snapshot.current_arrival,
                    snapshot.next_arrival,
                    snapshot.current_month_arrival,
                    snapshot.next_month_arrival,
                    serde_json::to_string(&snapshot.port_details)
                        .map_err(|e| DomainError::Parse(e.to_string()))?,
                    serde_json::to_string(&snapshot.customs_details)
                        .map_err(|e| DomainError::Parse(e.to_string()))?,
                    snapshot.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DomainError::Database(format!("Failed to insert snapshot: {e}")))?;
        Ok(changed > 0)
    }
}
