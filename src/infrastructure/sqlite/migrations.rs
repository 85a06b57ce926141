use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS import_snapshots (
            date TEXT PRIMARY KEY,
            current_shipment REAL NOT NULL DEFAULT 0,
            forecast_shipment REAL NOT NULL DEFAULT 0,
            forecast_next_shipment REAL NOT NULL DEFAULT 0,
            current_arrival REAL NOT NULL DEFAULT 0,
            next_arrival REAL NOT NULL DEFAULT 0,
            current_month_arrival REAL NOT NULL DEFAULT 0,
            next_month_arrival REAL NOT NULL DEFAULT 0,
            port_details TEXT NOT NULL DEFAULT '[]',
            customs_details TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}
