//! Prometheus-compatible metrics handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::super::types::AppState;
use crate::error_handling::AttemptFailure;

/// `GET /metrics` - Prometheus text exposition of the engine counters.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;

    let metrics = format!(
        r#"# HELP vessel_status_cache_entries Current number of cached vessel positions
# TYPE vessel_status_cache_entries gauge
vessel_status_cache_entries {}

# HELP vessel_status_uptime_seconds Seconds since process start
# TYPE vessel_status_uptime_seconds gauge
vessel_status_uptime_seconds {}

# HELP vessel_status_fetch_successes_total Fetches where a profile returned vessel data
# TYPE vessel_status_fetch_successes_total counter
vessel_status_fetch_successes_total {}

# HELP vessel_status_fetch_not_found_total Definitive not-found answers from the provider
# TYPE vessel_status_fetch_not_found_total counter
vessel_status_fetch_not_found_total {}

# HELP vessel_status_fetch_exhausted_total Fetches that exhausted every request profile
# TYPE vessel_status_fetch_exhausted_total counter
vessel_status_fetch_exhausted_total {}

# HELP vessel_status_attempt_challenge_total Attempts rejected with a bot challenge
# TYPE vessel_status_attempt_challenge_total counter
vessel_status_attempt_challenge_total {}

# HELP vessel_status_attempt_rate_limited_total Attempts rejected with 403/429/503
# TYPE vessel_status_attempt_rate_limited_total counter
vessel_status_attempt_rate_limited_total {}

# HELP vessel_status_attempt_connection_failure_total Attempts lost to timeouts or connection failures
# TYPE vessel_status_attempt_connection_failure_total counter
vessel_status_attempt_connection_failure_total {}

# HELP vessel_status_attempt_unexpected_total Attempts with an unclassifiable status or body
# TYPE vessel_status_attempt_unexpected_total counter
vessel_status_attempt_unexpected_total {}
"#,
        state.cache.size(),
        state.start_time.elapsed().as_secs_f64(),
        stats.successes(),
        stats.not_found(),
        stats.exhausted(),
        stats.get_failure_count(AttemptFailure::Challenge),
        stats.get_failure_count(AttemptFailure::RateLimitedOrForbidden),
        stats.get_failure_count(AttemptFailure::ConnectionFailure),
        stats.get_failure_count(AttemptFailure::UnexpectedShape),
    );

    (StatusCode::OK, metrics).into_response()
}
