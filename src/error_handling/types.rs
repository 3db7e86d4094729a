//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Non-terminal classifications of a single provider attempt.
///
/// Any of these advances the fetcher to the next profile; none of them ever
/// surfaces individually to the caller. The two terminal outcomes (success
/// and a definitive 404) live outside this enum because they stop the
/// profile loop instead of continuing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum AttemptFailure {
    /// 2xx response carrying a bot-challenge page or an error-shaped JSON
    /// body instead of vessel data.
    Challenge,
    /// HTTP 403, 429, or 503 - the provider rejected this fingerprint.
    RateLimitedOrForbidden,
    /// Transport-level timeout or connection failure.
    ConnectionFailure,
    /// Any other status or body shape we have no story for.
    UnexpectedShape,
}

impl AttemptFailure {
    /// Human-readable label, used in logs and the last-failure diagnostic.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptFailure::Challenge => "bot challenge",
            AttemptFailure::RateLimitedOrForbidden => "rate limited or forbidden",
            AttemptFailure::ConnectionFailure => "connection failure",
            AttemptFailure::UnexpectedShape => "unexpected response shape",
        }
    }
}

/// Terminal outcomes of a full fetch (all profiles considered).
///
/// Per-attempt failures are handled inside the fetcher; only these cross
/// its boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The provider answered 404 - authoritative, identifier-specific, and
    /// not retried with other profiles.
    #[error("vessel not found")]
    NotFound,

    /// Every profile was tried and rejected or errored.
    #[error("all {attempts} request profiles exhausted; last failure: {last_failure}")]
    AllProfilesExhausted {
        /// Number of profiles attempted.
        attempts: usize,
        /// Description of the final classified failure.
        last_failure: String,
    },

    /// An engine-internal fault that is neither a remote answer nor a
    /// fingerprint rejection (e.g. an unusable configured base URL).
    #[error("internal fetch error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_attempt_failure_labels_are_distinct() {
        let labels: Vec<&str> = AttemptFailure::iter().map(|f| f.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::NotFound.to_string(), "vessel not found");

        let err = FetchError::AllProfilesExhausted {
            attempts: 4,
            last_failure: "rate limited or forbidden (profile bare-curl)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("all 4 request profiles exhausted"));
        assert!(msg.contains("bare-curl"));
    }
}
