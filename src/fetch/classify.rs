//! Attempt outcome classification.
//!
//! This is the central policy table of the engine: given the raw outcome of
//! one HTTP attempt, decide whether we have vessel data (stop), an
//! authoritative "no such vessel" (stop), or one of the failure kinds that
//! mean "this fingerprint was rejected - try the next profile".

use reqwest::StatusCode;
use serde_json::Value;

use crate::error_handling::AttemptFailure;

/// Markers that identify an anti-bot interstitial in a 2xx text body.
///
/// `challenge-platform` and `Just a moment` are Cloudflare's challenge page;
/// `Forbidden` covers providers that return a plain-text rejection with a
/// success status.
pub const CHALLENGE_MARKERS: &[&str] = &["challenge-platform", "Just a moment", "Forbidden"];

/// Classification of a single provider attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Structured vessel data; stop iterating and return it.
    Success(Value),
    /// HTTP 404 - identifier-specific, not fingerprint-specific. Stop
    /// iterating; other profiles would get the same answer.
    DefinitiveNotFound,
    /// A non-terminal failure; advance to the next profile.
    Failure(AttemptFailure),
}

/// Classifies a completed HTTP exchange (status received, body read).
///
/// | Raw outcome | Classification |
/// |---|---|
/// | 2xx, JSON object without an `error` field | `Success` |
/// | 2xx, JSON object with an `error` field | `Failure(Challenge)` |
/// | 2xx, non-JSON body with a challenge marker | `Failure(Challenge)` |
/// | 2xx, anything else | `Failure(UnexpectedShape)` |
/// | 404 | `DefinitiveNotFound` |
/// | 403 / 429 / 503 | `Failure(RateLimitedOrForbidden)` |
/// | any other status | `Failure(UnexpectedShape)` |
///
/// Transport-level failures (timeout, refused connection) never reach this
/// function; see [`categorize_transport_error`].
///
/// [`categorize_transport_error`]: crate::error_handling::categorize_transport_error
pub fn classify_response(status: StatusCode, body: &str) -> Classification {
    if status.is_success() {
        return classify_success_body(body);
    }

    match status.as_u16() {
        404 => Classification::DefinitiveNotFound,
        403 | 429 | 503 => Classification::Failure(AttemptFailure::RateLimitedOrForbidden),
        _ => Classification::Failure(AttemptFailure::UnexpectedShape),
    }
}

// A 2xx status proves nothing: challenge pages and error envelopes are
// served with success statuses. Only an object-shaped JSON body with no
// error field counts as vessel data.
fn classify_success_body(body: &str) -> Classification {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            if map.contains_key("error") {
                Classification::Failure(AttemptFailure::Challenge)
            } else {
                Classification::Success(Value::Object(map))
            }
        }
        // JSON, but not object-shaped (array, bare string, number): not a
        // challenge we recognize and not vessel data either.
        Ok(_) => Classification::Failure(AttemptFailure::UnexpectedShape),
        Err(_) => {
            if CHALLENGE_MARKERS.iter().any(|m| body.contains(m)) {
                Classification::Failure(AttemptFailure::Challenge)
            } else {
                Classification::Failure(AttemptFailure::UnexpectedShape)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_json_object_is_success() {
        let body = r#"{"name":"MSC OSCAR","latitude":1.0,"longitude":2.0}"#;
        match classify_response(StatusCode::OK, body) {
            Classification::Success(payload) => {
                assert_eq!(payload["name"], "MSC OSCAR");
                assert_eq!(payload["latitude"], 1.0);
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_2xx_json_with_error_field_is_challenge() {
        let body = r#"{"error":"access denied"}"#;
        assert_eq!(
            classify_response(StatusCode::OK, body),
            Classification::Failure(AttemptFailure::Challenge)
        );
    }

    #[test]
    fn test_2xx_challenge_page_is_challenge() {
        for body in [
            "<html><head><title>Just a moment...</title></head></html>",
            "<script src=\"/cdn-cgi/challenge-platform/orchestrate.js\"></script>",
            "Forbidden",
        ] {
            assert_eq!(
                classify_response(StatusCode::OK, body),
                Classification::Failure(AttemptFailure::Challenge),
                "body {:?} should classify as a challenge",
                body
            );
        }
    }

    #[test]
    fn test_2xx_unrecognized_text_is_unexpected_shape() {
        assert_eq!(
            classify_response(StatusCode::OK, "<html>welcome</html>"),
            Classification::Failure(AttemptFailure::UnexpectedShape)
        );
    }

    #[test]
    fn test_2xx_non_object_json_is_unexpected_shape() {
        for body in ["[1,2,3]", "\"a string\"", "42", "null"] {
            assert_eq!(
                classify_response(StatusCode::OK, body),
                Classification::Failure(AttemptFailure::UnexpectedShape),
                "body {:?} should be unexpected",
                body
            );
        }
    }

    #[test]
    fn test_404_is_definitive_not_found() {
        assert_eq!(
            classify_response(StatusCode::NOT_FOUND, "Not Found"),
            Classification::DefinitiveNotFound
        );
    }

    #[test]
    fn test_blocked_statuses_are_rate_limited_or_forbidden() {
        for status in [
            StatusCode::FORBIDDEN,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert_eq!(
                classify_response(status, ""),
                Classification::Failure(AttemptFailure::RateLimitedOrForbidden),
                "status {} should classify as rate limited/forbidden",
                status
            );
        }
    }

    #[test]
    fn test_other_statuses_are_unexpected_shape() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            assert_eq!(
                classify_response(status, ""),
                Classification::Failure(AttemptFailure::UnexpectedShape),
                "status {} should classify as unexpected",
                status
            );
        }
    }

    #[test]
    fn test_204_empty_body_is_not_success() {
        // An empty body is not valid JSON and carries no marker.
        assert_eq!(
            classify_response(StatusCode::NO_CONTENT, ""),
            Classification::Failure(AttemptFailure::UnexpectedShape)
        );
    }

    #[test]
    fn test_empty_json_object_is_success() {
        // Degenerate but object-shaped with no error field; the policy says
        // that is data. Rejecting it would require schema knowledge the
        // engine deliberately does not have.
        assert!(matches!(
            classify_response(StatusCode::OK, "{}"),
            Classification::Success(_)
        ));
    }
}
