//! Administrative cache handler.

use axum::extract::State;
use axum::Json;
use log::info;

use super::super::types::{now_timestamp, AppState, MessageResponse};

/// `DELETE /cache` - drops every cached vessel position.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    let dropped = state.cache.size();
    state.cache.clear();
    info!("cache cleared ({dropped} entries dropped)");

    Json(MessageResponse {
        success: true,
        message: "Cache cleared".to_string(),
        timestamp: now_timestamp(),
    })
}
