//! Vessel lookup service.
//!
//! The engine's public entry point: validate the identifier, serve a fresh
//! cache entry if one exists, otherwise run the resilient fetcher and cache
//! its answer. Only successful payloads are cached - a transient provider
//! hiccup must not poison an identifier as missing or blocked.

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use serde_json::Value;

use crate::cache::VesselCache;
use crate::config::CACHE_TTL;
use crate::error_handling::FetchError;
use crate::fetch::VesselFetcher;
use crate::imo::ImoNumber;

/// Uniform outcome of a lookup, consumed by the HTTP handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Vessel data, either freshly fetched or served from cache.
    Success {
        /// The provider's JSON payload.
        payload: Value,
        /// Whether the payload came from the cache.
        from_cache: bool,
    },
    /// The provider authoritatively reported no such vessel (HTTP 404).
    NotFound,
    /// Every request profile was rejected or errored.
    Blocked {
        /// Diagnostic description of the exhaustion.
        detail: String,
    },
    /// An unexpected engine-internal fault.
    TransientError {
        /// Diagnostic description of the fault.
        detail: String,
    },
    /// The supplied identifier is not a 7-digit IMO number.
    InvalidInput {
        /// Human-readable validation failure.
        detail: String,
    },
}

/// Composes validator, cache, and fetcher into a single lookup operation.
///
/// The sole writer and reader of the cache during lookups; constructed once
/// at startup and shared behind an `Arc`.
pub struct LookupService {
    cache: Arc<VesselCache>,
    fetcher: VesselFetcher,
}

impl LookupService {
    /// Creates the service over an existing cache and fetcher.
    pub fn new(cache: Arc<VesselCache>, fetcher: VesselFetcher) -> Self {
        LookupService { cache, fetcher }
    }

    /// Looks up a vessel position by raw identifier input.
    ///
    /// `now` is taken as a parameter rather than sampled internally so the
    /// TTL boundary is testable without waiting out real time.
    ///
    /// Flow: validate → fresh-cache short-circuit → fetch → cache write on
    /// success. The cache is mutated at most once per call, and only when
    /// the fetcher returned data.
    pub async fn lookup(&self, raw_input: &str, now: Instant) -> LookupResult {
        let imo = match ImoNumber::parse(raw_input) {
            Ok(imo) => imo,
            Err(e) => {
                return LookupResult::InvalidInput {
                    detail: e.to_string(),
                }
            }
        };

        let key = imo.cache_key();
        if let Some(entry) = self.cache.get(&key) {
            if now.duration_since(entry.stored_at) < CACHE_TTL {
                debug!("IMO {}: serving cached position", imo);
                return LookupResult::Success {
                    payload: entry.payload,
                    from_cache: true,
                };
            }
            debug!("IMO {}: cache entry is stale, refetching", imo);
        }

        match self.fetcher.fetch(&imo).await {
            Ok(payload) => {
                self.cache.put(&key, payload.clone(), now);
                LookupResult::Success {
                    payload,
                    from_cache: false,
                }
            }
            Err(FetchError::NotFound) => LookupResult::NotFound,
            Err(e @ FetchError::AllProfilesExhausted { .. }) => LookupResult::Blocked {
                detail: e.to_string(),
            },
            Err(FetchError::Internal(detail)) => LookupResult::TransientError { detail },
        }
    }
}
