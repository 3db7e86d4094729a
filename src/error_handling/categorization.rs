//! Transport error categorization.

use super::types::AttemptFailure;

/// Categorizes a transport-level `reqwest::Error` into an [`AttemptFailure`].
///
/// Timeouts and connection failures are the expected ways an attempt dies on
/// the wire (the provider silently dropping a suspicious client looks like
/// either); anything else reqwest can produce here - body, decode, builder
/// errors - has no dedicated slot in the taxonomy and lands in
/// `UnexpectedShape`.
///
/// Status-bearing outcomes never reach this function: reqwest hands back
/// non-2xx responses as `Ok`, and those are classified from the status code
/// directly (see `fetch::classify`).
pub fn categorize_transport_error(error: &reqwest::Error) -> AttemptFailure {
    if error.is_timeout() || error.is_connect() {
        AttemptFailure::ConnectionFailure
    } else {
        AttemptFailure::UnexpectedShape
    }
}

// Creating real reqwest::Error instances requires live connections, so the
// behavior of this function is exercised by the integration tests that point
// the fetcher at an unroutable address (see tests/lookup_integration.rs).
