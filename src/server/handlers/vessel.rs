//! Vessel lookup handlers.
//!
//! Both route shapes (`/vessel?imo=` and `/vessel/{imo}`) funnel into the
//! same lookup engine; the handlers only translate `LookupResult` variants
//! into HTTP status codes and envelopes.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::super::types::{now_timestamp, AppState, ErrorResponse, VesselResponse};
use crate::lookup::LookupResult;

/// Query parameters for `GET /vessel`.
#[derive(Deserialize)]
pub struct VesselQuery {
    /// The raw IMO input; validated by the engine, not the route layer.
    pub imo: Option<String>,
}

/// `GET /vessel?imo=<imo>`
pub async fn vessel_by_query(
    State(state): State<AppState>,
    Query(params): Query<VesselQuery>,
) -> Response {
    let Some(imo) = params.imo else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: "IMO parameter is required".to_string(),
                details: None,
                example: Some("?imo=1234567".to_string()),
                timestamp: now_timestamp(),
            }),
        )
            .into_response();
    };
    lookup_response(&state, &imo).await
}

/// `GET /vessel/{imo}`
pub async fn vessel_by_path(State(state): State<AppState>, Path(imo): Path<String>) -> Response {
    lookup_response(&state, &imo).await
}

async fn lookup_response(state: &AppState, raw_imo: &str) -> Response {
    match state.service.lookup(raw_imo, Instant::now()).await {
        LookupResult::Success {
            payload,
            from_cache,
        } => (
            StatusCode::OK,
            Json(VesselResponse {
                success: true,
                data: payload,
                cached: from_cache,
                timestamp: now_timestamp(),
            }),
        )
            .into_response(),

        LookupResult::InvalidInput { detail } => error_response(
            StatusCode::BAD_REQUEST,
            "Invalid IMO number. Must be exactly 7 digits.",
            Some(detail),
        ),

        LookupResult::NotFound => error_response(StatusCode::NOT_FOUND, "Vessel not found", None),

        LookupResult::Blocked { detail } => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Access blocked by remote service",
            Some(detail),
        ),

        LookupResult::TransientError { detail } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            Some(detail),
        ),
    }
}

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: error.to_string(),
            details,
            example: None,
            timestamp: now_timestamp(),
        }),
    )
        .into_response()
}
