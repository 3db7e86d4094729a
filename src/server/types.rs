//! HTTP service data structures.

use std::sync::Arc;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::VesselCache;
use crate::error_handling::AttemptStats;
use crate::lookup::LookupService;

/// Shared state for the HTTP service.
#[derive(Clone)]
pub struct AppState {
    /// The lookup engine; every data route funnels through it.
    pub service: Arc<LookupService>,
    /// The cache, reachable directly for the administrative clear and the
    /// diagnostics endpoints.
    pub cache: Arc<VesselCache>,
    /// Cumulative attempt/outcome counters.
    pub stats: Arc<AttemptStats>,
    /// Process start, for uptime reporting.
    pub start_time: Instant,
}

/// Successful vessel lookup envelope.
#[derive(Serialize)]
pub struct VesselResponse {
    /// Always `true`.
    pub success: bool,
    /// The provider's vessel telemetry payload, passed through opaquely.
    pub data: Value,
    /// Whether the payload was served from cache.
    pub cached: bool,
    /// Response time, RFC 3339.
    pub timestamp: String,
}

/// Error envelope shared by every failure response.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
    /// Optional diagnostic detail (e.g. the last classified failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Optional usage hint for client mistakes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Response time, RFC 3339.
    pub timestamp: String,
}

/// Envelope for administrative operations.
#[derive(Serialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
    /// Response time, RFC 3339.
    pub timestamp: String,
}

/// JSON response for the `/health` endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"OK"` when the process is serving.
    pub status: &'static str,
    /// Current cache entry count (fresh and stale alike).
    pub cache_size: usize,
    /// Response time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: &'static str,
}

/// JSON response for the `/status` endpoint.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Seconds since process start.
    pub uptime_seconds: f64,
    /// Current cache entry count.
    pub cache_size: usize,
    /// Terminal lookup outcome counters.
    pub lookups: LookupCounts,
    /// Per-classification attempt failure counters.
    pub attempt_failures: FailureCounts,
}

/// Terminal lookup outcome counters.
#[derive(Serialize)]
pub struct LookupCounts {
    /// Fetches where some profile returned vessel data.
    pub successes: usize,
    /// Definitive not-found answers from the provider.
    pub not_found: usize,
    /// Fetches that exhausted every profile.
    pub exhausted: usize,
}

/// Per-classification attempt failure counters.
#[derive(Serialize)]
pub struct FailureCounts {
    /// Sum of all classified attempt failures.
    pub total: usize,
    /// Bot-challenge responses.
    pub challenge: usize,
    /// HTTP 403/429/503 rejections.
    pub rate_limited_or_forbidden: usize,
    /// Transport timeouts and connection failures.
    pub connection_failure: usize,
    /// Statuses/bodies outside the classification table.
    pub unexpected_shape: usize,
}

/// Current time as an RFC 3339 string with millisecond precision, matching
/// the JavaScript `toISOString` format clients of the original API expect.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
