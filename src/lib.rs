//! vessel_status library: resilient vessel position lookup
//!
//! This library answers "where is vessel X right now" by looking up a
//! ship's AIS-derived position from a third-party provider, given its
//! 7-digit IMO identifier. The provider actively blocks automated access,
//! so the core of the library is a fetch engine that walks an ordered table
//! of differently-fingerprinted request profiles until one succeeds,
//! classifying every failure, and caches successful answers for five
//! minutes.
//!
//! # Example
//!
//! ```no_run
//! use vessel_status::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 3005,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The engine itself is usable without the HTTP layer: build a
//! [`LookupService`] over a [`VesselCache`] and a [`VesselFetcher`] and
//! call [`LookupService::lookup`] directly.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod cache;
pub mod config;
mod error_handling;
mod fetch;
mod imo;
pub mod initialization;
mod lookup;
mod profiles;
mod server;

// Re-export public API
pub use cache::{CacheEntry, VesselCache};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AttemptFailure, AttemptStats, FetchError, InitializationError};
pub use fetch::{classify_response, Classification, VesselFetcher, CHALLENGE_MARKERS};
pub use imo::{ImoNumber, ImoValidationError};
pub use lookup::{LookupResult, LookupService};
pub use profiles::{RequestProfile, PROFILES};
pub use run::run_server;
pub use server::{build_router, AppState};

// Internal run module (composition root)
mod run {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};

    use crate::cache::VesselCache;
    use crate::config::Config;
    use crate::error_handling::AttemptStats;
    use crate::fetch::VesselFetcher;
    use crate::initialization::init_client;
    use crate::lookup::LookupService;
    use crate::server::{start_server, AppState};

    /// Builds the engine from a configuration and serves it over HTTP until
    /// shutdown.
    ///
    /// This is the main entry point for the binary. The cache, statistics,
    /// HTTP client, fetcher, and lookup service are constructed once here
    /// and shared by every request - there is no ambient global state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// listener cannot bind.
    pub async fn run_server(config: Config) -> Result<()> {
        let cache = Arc::new(VesselCache::new());
        let stats = Arc::new(AttemptStats::new());

        let client = init_client().context("Failed to initialize HTTP client")?;
        let fetcher = VesselFetcher::new(
            client,
            &config.provider_base_url,
            Duration::from_millis(config.pacing_ms),
            Arc::clone(&stats),
        );
        let service = Arc::new(LookupService::new(Arc::clone(&cache), fetcher));

        let state = AppState {
            service,
            cache,
            stats,
            start_time: Instant::now(),
        };

        start_server(&config.host, config.port, state).await
    }
}
