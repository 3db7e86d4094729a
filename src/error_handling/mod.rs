//! Failure taxonomy and attempt statistics.
//!
//! Every raw HTTP attempt against the provider is classified into a small,
//! closed set of failure kinds; the taxonomy is what distinguishes "this
//! identifier genuinely has no data" from "this fingerprint was rejected,
//! try another one". Counters for each kind feed the observability
//! endpoints.

mod categorization;
mod stats;
mod types;

pub use categorization::categorize_transport_error;
pub use stats::AttemptStats;
pub use types::{AttemptFailure, FetchError, InitializationError};
