//! HTTP client initialization.

use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the shared HTTP client used for all provider attempts.
///
/// The client deliberately carries no default User-Agent and no global
/// timeout: both are per-attempt properties of the fingerprint profile
/// applied to each request. Compression negotiation and redirect handling
/// are left at the client's defaults so responses arrive decoded.
///
/// # Errors
///
/// Returns a `reqwest::Error` (wrapped) if client construction fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().build()?;
    Ok(client)
}
