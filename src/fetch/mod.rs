//! Resilient vessel position fetcher.
//!
//! One fetch walks the fingerprint profile table in order, issuing a GET to
//! the provider with each persona until an attempt classifies as success, a
//! definitive 404 stops the walk, or the table is exhausted. Attempts are
//! strictly sequential with a fixed pacing delay between them - the goal is
//! fingerprint diversity over time, not throughput.
//!
//! Every entry point into the service funnels through this one fetcher, so
//! there is exactly one copy of the retry/classification policy.

mod classify;

pub use classify::{classify_response, Classification, CHALLENGE_MARKERS};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use serde_json::Value;
use url::Url;

use crate::config::PROVIDER_POSITION_PATH;
use crate::error_handling::{categorize_transport_error, AttemptStats, FetchError};
use crate::imo::ImoNumber;
use crate::profiles::{RequestProfile, PROFILES};

/// Fetches vessel positions from the AIS provider, falling back through the
/// fingerprint profile table.
///
/// Holds the shared HTTP client, the configured provider base URL, the
/// pacing delay, and the statistics tracker. One instance serves the whole
/// process.
pub struct VesselFetcher {
    client: reqwest::Client,
    base_url: String,
    pacing: Duration,
    stats: Arc<AttemptStats>,
}

impl VesselFetcher {
    /// Creates a fetcher against `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated; the URL itself is
    /// validated lazily at fetch time so a bad override surfaces as a
    /// classified internal error rather than a construction panic.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        pacing: Duration,
        stats: Arc<AttemptStats>,
    ) -> Self {
        VesselFetcher {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            pacing,
            stats,
        }
    }

    /// Fetches the position payload for `imo`.
    ///
    /// Iterates the profile table in order: first success wins, a 404 stops
    /// the iteration authoritatively, every other classified failure
    /// advances to the next profile after the pacing delay.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] - the provider answered 404.
    /// - [`FetchError::AllProfilesExhausted`] - no profile produced data.
    /// - [`FetchError::Internal`] - the configured base URL is unusable.
    pub async fn fetch(&self, imo: &ImoNumber) -> Result<Value, FetchError> {
        let target = format!("{}{}{}", self.base_url, PROVIDER_POSITION_PATH, imo);
        let url = Url::parse(&target)
            .map_err(|e| FetchError::Internal(format!("invalid provider URL {target:?}: {e}")))?;

        let mut last_failure = String::from("no attempts made");

        for (attempt, profile) in PROFILES.iter().enumerate() {
            if attempt > 0 && !self.pacing.is_zero() {
                // Deliberate pacing between fingerprints; see config docs.
                tokio::time::sleep(self.pacing).await;
            }

            debug!(
                "IMO {}: attempt {}/{} using profile {}",
                imo,
                attempt + 1,
                PROFILES.len(),
                profile.name
            );

            match self.attempt(&url, profile).await {
                Classification::Success(payload) => {
                    self.stats.record_success();
                    info!(
                        "IMO {}: success on attempt {}/{} (profile {})",
                        imo,
                        attempt + 1,
                        PROFILES.len(),
                        profile.name
                    );
                    return Ok(payload);
                }
                Classification::DefinitiveNotFound => {
                    self.stats.record_not_found();
                    info!("IMO {}: provider reports no such vessel", imo);
                    return Err(FetchError::NotFound);
                }
                Classification::Failure(failure) => {
                    self.stats.increment_failure(failure);
                    warn!(
                        "IMO {}: attempt {}/{} failed: {} (profile {})",
                        imo,
                        attempt + 1,
                        PROFILES.len(),
                        failure.as_str(),
                        profile.name
                    );
                    last_failure = format!("{} (profile {})", failure.as_str(), profile.name);
                }
            }
        }

        self.stats.record_exhausted();
        Err(FetchError::AllProfilesExhausted {
            attempts: PROFILES.len(),
            last_failure,
        })
    }

    // One raw attempt: send with the profile's headers and timeout, read
    // the body, classify. All failure modes collapse into a Classification;
    // nothing escapes as an error.
    async fn attempt(&self, url: &Url, profile: &RequestProfile) -> Classification {
        let builder = profile.apply_to_request_builder(self.client.get(url.clone()));

        match builder.send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => classify_response(status, &body),
                    Err(e) => {
                        debug!("failed to read response body: {e}");
                        Classification::Failure(categorize_transport_error(&e))
                    }
                }
            }
            Err(e) => {
                debug!("transport error: {e}");
                Classification::Failure(categorize_transport_error(&e))
            }
        }
    }
}
