pub mod error;
pub mod handlers;

use crate::GrainTrack;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state available to every handler.
pub struct AppState {
    pub service: GrainTrack,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // The report frontend is served from another origin during development,
    // so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/soybean/import-data", get(handlers::get_import_data))
        .route("/api/v1/soybean/comparison", get(handlers::get_comparison))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Configure and run the HTTP server until shutdown.
pub async fn run_server(addr: SocketAddr, service: GrainTrack) -> Result<(), std::io::Error> {
    let state = Arc::new(AppState { service });
    let app = build_router(state);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
