//! Health check handler.

use axum::extract::State;
use axum::Json;

use super::super::types::{now_timestamp, AppState, HealthResponse};

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        cache_size: state.cache.size(),
        timestamp: now_timestamp(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
