//! API documentation handler.

use axum::Json;
use serde_json::{json, Value};

use super::super::types::now_timestamp;

/// `GET /` - machine-readable API summary.
pub async fn docs_handler() -> Json<Value> {
    Json(json!({
        "name": "Vessel Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Get vessel position data by IMO number",
        "endpoints": {
            "GET /vessel?imo={imo}": "Get vessel position by IMO number",
            "GET /vessel/{imo}": "Get vessel position by IMO number",
            "GET /health": "Health check",
            "GET /status": "Engine statistics",
            "GET /metrics": "Prometheus metrics",
            "DELETE /cache": "Clear the position cache"
        },
        "example": "/vessel/1234567",
        "parameters": {
            "imo": "Required. 7-digit IMO number"
        },
        "timestamp": now_timestamp(),
    }))
}
