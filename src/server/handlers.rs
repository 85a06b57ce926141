use crate::domain::entities::report::{ComparisonPoint, ImportReport};
use crate::server::{error::ApiError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    /// Optional query date, `YYYY-MM-DD`. Defaults to the newest observation.
    pub as_of: Option<String>,
}

fn parse_as_of(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| ApiError::BadRequest(format!("invalid as_of date '{s}': {e}")))
    })
    .transpose()
}

/// # GET /api/v1/soybean/import-data
pub async fn get_import_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<ImportReport>, ApiError> {
    let as_of = parse_as_of(query.as_of.as_deref())?;
    let report = state.service.report(as_of)?;
    Ok(Json(report))
}

/// # GET /api/v1/soybean/comparison
pub async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<Vec<ComparisonPoint>>, ApiError> {
    let as_of = parse_as_of(query.as_of.as_deref())?;
    Ok(Json(state.service.monthly_comparison(as_of)))
}

/// # GET /api/v1/health
pub async fn health() -> &'static str {
    "OK"
}
