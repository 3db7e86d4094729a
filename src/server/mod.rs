//! HTTP service exposing the lookup engine.
//!
//! Thin plumbing around the engine: route dispatch, CORS, and the
//! translation of [`LookupResult`] into status codes and JSON envelopes.
//! All decision logic lives below this layer.
//!
//! Routes:
//! - `GET /` - API documentation
//! - `GET /vessel?imo=<imo>` and `GET /vessel/:imo` - position lookup
//! - `GET /health` - health check
//! - `GET /status` - engine statistics
//! - `GET /metrics` - Prometheus metrics
//! - `DELETE /cache` - administrative cache clear
//!
//! [`LookupResult`]: crate::lookup::LookupResult

mod handlers;
mod types;

use axum::http::{header, Method};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use handlers::{
    clear_cache_handler, docs_handler, health_handler, metrics_handler, status_handler,
    vessel_by_path, vessel_by_query,
};
pub use types::AppState;

/// Builds the service router over the given state.
///
/// Wrong methods on existing routes get 405 from axum's method dispatch;
/// the CORS layer answers OPTIONS preflights and stamps
/// `Access-Control-Allow-Origin: *` on every response.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(docs_handler))
        .route("/vessel", get(vessel_by_query))
        .route("/vessel/:imo", get(vessel_by_path))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .route("/cache", delete(clear_cache_handler))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves until ctrl-c.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {host}:{port}: {e}"))?;

    log::info!("Vessel tracker listening on http://{host}:{port}/");
    log::info!("  - Lookup: http://{host}:{port}/vessel/<7-digit-imo>");
    log::info!("  - Health: http://{host}:{port}/health");
    log::info!("  - Status: http://{host}:{port}/status");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received, draining connections"),
        Err(e) => {
            log::error!("Failed to install ctrl-c handler: {e}");
            // Returning here would shut the server down immediately; park
            // instead and let the process be killed externally.
            std::future::pending::<()>().await;
        }
    }
}
