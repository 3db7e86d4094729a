//! Attempt statistics tracking.
//!
//! This module provides thread-safe statistics tracking for provider
//! attempts and lookup outcomes. The counters are cumulative since process
//! start and feed the `/status` and `/metrics` endpoints.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::AttemptFailure;

/// Thread-safe attempt statistics tracker.
///
/// Tracks one counter per [`AttemptFailure`] kind plus counters for the
/// terminal lookup outcomes. All counters are initialized to zero on
/// creation and can be shared across tasks via `Arc`.
pub struct AttemptStats {
    failures: HashMap<AttemptFailure, AtomicUsize>,
    successes: AtomicUsize,
    not_found: AtomicUsize,
    exhausted: AtomicUsize,
}

impl AttemptStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in AttemptFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }
        AttemptStats {
            failures,
            successes: AtomicUsize::new(0),
            not_found: AtomicUsize::new(0),
            exhausted: AtomicUsize::new(0),
        }
    }

    /// Increment the counter for a classified attempt failure.
    pub fn increment_failure(&self, failure: AttemptFailure) {
        // Every AttemptFailure variant is initialized in new(), so the
        // lookup cannot miss; log instead of panicking if it ever does.
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "attempt failure counter for {:?} missing from stats map",
                failure
            );
        }
    }

    /// Get the count for a classified attempt failure.
    pub fn get_failure_count(&self, failure: AttemptFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total classified attempt failures across all kinds.
    pub fn total_failures(&self) -> usize {
        AttemptFailure::iter()
            .map(|f| self.get_failure_count(f))
            .sum()
    }

    /// Record a successful fetch (some profile returned vessel data).
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a definitive not-found answer from the provider.
    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fetch that exhausted every profile without an answer.
    pub fn record_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of successful fetches.
    pub fn successes(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }

    /// Number of definitive not-found answers.
    pub fn not_found(&self) -> usize {
        self.not_found.load(Ordering::SeqCst)
    }

    /// Number of fully exhausted fetches.
    pub fn exhausted(&self) -> usize {
        self.exhausted.load(Ordering::SeqCst)
    }
}

impl Default for AttemptStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_initialization() {
        let stats = AttemptStats::new();
        for failure in AttemptFailure::iter() {
            assert_eq!(stats.get_failure_count(failure), 0);
        }
        assert_eq!(stats.total_failures(), 0);
        assert_eq!(stats.successes(), 0);
        assert_eq!(stats.not_found(), 0);
        assert_eq!(stats.exhausted(), 0);
    }

    #[test]
    fn test_failure_increments_are_independent() {
        let stats = AttemptStats::new();
        stats.increment_failure(AttemptFailure::Challenge);
        stats.increment_failure(AttemptFailure::Challenge);
        stats.increment_failure(AttemptFailure::ConnectionFailure);

        assert_eq!(stats.get_failure_count(AttemptFailure::Challenge), 2);
        assert_eq!(stats.get_failure_count(AttemptFailure::ConnectionFailure), 1);
        assert_eq!(
            stats.get_failure_count(AttemptFailure::RateLimitedOrForbidden),
            0
        );
        assert_eq!(stats.total_failures(), 3);
    }

    #[test]
    fn test_outcome_counters() {
        let stats = AttemptStats::new();
        stats.record_success();
        stats.record_success();
        stats.record_not_found();
        stats.record_exhausted();

        assert_eq!(stats.successes(), 2);
        assert_eq!(stats.not_found(), 1);
        assert_eq!(stats.exhausted(), 1);
    }
}
