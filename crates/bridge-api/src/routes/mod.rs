//! Route definitions
//!
//! Webhook intake routes scoped by the shared secret, plus health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, webhook};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main router with the webhook intake routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(webhook_routes()).fallback(not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Webhook intake routes
///
/// The secret is part of the path so that each source system can be handed
/// one opaque URL with no extra header configuration.
fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook/:secret/:source", post(webhook::receive_webhook))
}

/// Fallback for unmatched paths
///
/// Same response as a secret mismatch, so probing cannot tell a wrong
/// secret apart from a route that never existed.
async fn not_found() -> ApiError {
    ApiError::NotFound
}
