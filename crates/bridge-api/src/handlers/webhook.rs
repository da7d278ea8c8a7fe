//! Webhook intake handler
//!
//! One endpoint serves every source system; the `{source}` path segment
//! selects the mapping and the `room_id` query parameter selects the
//! destination.

use axum::extract::{Path, Query, State};
use bridge_core::RoomId;
use serde::Deserialize;
use tracing::{debug, info};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Addressing parameters for inbound webhooks
#[derive(Debug, Deserialize)]
pub struct WebhookParams {
    room_id: Option<String>,
}

/// Receive a webhook event
///
/// POST /webhook/{secret}/{source}?room_id={room}
pub async fn receive_webhook(
    State(state): State<AppState>,
    Path((secret, source)): Path<(String, String)>,
    Query(params): Query<WebhookParams>,
    body: String,
) -> ApiResult<&'static str> {
    // A wrong secret must look exactly like an unknown path.
    if secret != state.config().webhook.secret {
        return Err(ApiError::NotFound);
    }

    let room = params
        .room_id
        .as_deref()
        .map(RoomId::new)
        .transpose()
        .map_err(|_| ApiError::MissingRoom)?
        .ok_or(ApiError::MissingRoom)?;

    let Some(message) = state.engine().transform_named(&source, &body)? else {
        debug!(source = %source, "event ignored");
        return Ok("ignored");
    };
    debug!(source = %source, preview = %message.preview(80), "event transformed");

    state.delivery().deliver(&room, &message).await?;

    info!(source = %source, room = %room, "event delivered");
    Ok("ok")
}
