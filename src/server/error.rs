use crate::domain::error::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Converts service failures into HTTP responses. Store outages and database
/// faults surface as opaque 500s; malformed queries get a 400 with detail.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Domain(DomainError::StoreUnavailable(msg)) => {
                tracing::error!(error = %msg, "store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The data store is unavailable".to_string(),
                )
            }
            ApiError::Domain(DomainError::Database(msg)) => {
                tracing::error!(error = %msg, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            ApiError::Domain(DomainError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            ApiError::Domain(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
