//! JSON status handler.

use axum::extract::State;
use axum::Json;

use super::super::types::{AppState, FailureCounts, LookupCounts, StatusResponse};
use crate::error_handling::AttemptFailure;

/// `GET /status` - detailed engine statistics.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let stats = &state.stats;

    Json(StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        cache_size: state.cache.size(),
        lookups: LookupCounts {
            successes: stats.successes(),
            not_found: stats.not_found(),
            exhausted: stats.exhausted(),
        },
        attempt_failures: FailureCounts {
            total: stats.total_failures(),
            challenge: stats.get_failure_count(AttemptFailure::Challenge),
            rate_limited_or_forbidden: stats
                .get_failure_count(AttemptFailure::RateLimitedOrForbidden),
            connection_failure: stats.get_failure_count(AttemptFailure::ConnectionFailure),
            unexpected_shape: stats.get_failure_count(AttemptFailure::UnexpectedShape),
        },
    })
}
