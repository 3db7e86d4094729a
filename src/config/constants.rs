//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the engine.
//! The TTL and the profile table are deliberately constants rather than
//! configuration: the core's behavior should not vary between deployments.

use std::time::Duration;

/// How long a cached vessel position is considered fresh.
///
/// Five minutes: long enough to absorb bursts of lookups for the same
/// vessel, short enough that a moving ship's reported position stays
/// useful. Entries older than this are bypassed on read, not evicted.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache key prefix; full keys are `vessel_<imo>`.
pub const CACHE_KEY_PREFIX: &str = "vessel_";

/// Expected length of an IMO number, in ASCII digits.
pub const IMO_LENGTH: usize = 7;

/// Default AIS provider base URL.
///
/// Overridable via `--provider-base-url` so integration tests can point the
/// fetcher at a local mock server; production deployments leave it alone.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://www.aisfriends.com";

/// Provider path template; the IMO number is appended directly after the
/// `imo:` marker.
pub const PROVIDER_POSITION_PATH: &str = "/api/vessel/position/imo:";

/// Fixed delay between profile attempts in milliseconds.
///
/// Deliberate pacing: back-to-back retries with fresh fingerprints look
/// exactly like the bot traffic the provider's rate-limit heuristics are
/// tuned to catch.
pub const ATTEMPT_PACING_MS: u64 = 2000;

/// Default port for the HTTP service.
pub const DEFAULT_PORT: u16 = 3005;

/// Default bind address for the HTTP service.
pub const DEFAULT_HOST: &str = "0.0.0.0";
