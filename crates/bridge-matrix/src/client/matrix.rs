//! Matrix client-server API message sending

use std::time::Duration;

use async_trait::async_trait;
use bridge_core::{ChatMessage, DeliveryError, MessageDelivery, RoomId};
use tracing::debug;

use crate::wire::RoomMessage;

/// Matrix connection configuration
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Homeserver base URL, e.g. `https://matrix.example.org`
    pub homeserver: String,
    /// Access token of the bridge account
    pub access_token: String,
    /// Maximum time to wait for a send request
    pub send_timeout: Duration,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            homeserver: String::from("http://localhost:8008"),
            access_token: String::new(),
            send_timeout: Duration::from_secs(10),
        }
    }
}

/// Client for sending room messages through a Matrix homeserver
#[derive(Debug, Clone)]
pub struct MatrixClient {
    http: reqwest::Client,
    config: MatrixConfig,
}

impl MatrixClient {
    /// Create a client from configuration
    ///
    /// Fails when the configuration cannot produce a usable client, so a
    /// broken setup surfaces at startup instead of on the first webhook.
    pub fn new(config: MatrixConfig) -> Result<Self, DeliveryError> {
        if config.homeserver.trim().is_empty() {
            return Err(DeliveryError::Config(
                "homeserver URL must not be empty".to_string(),
            ));
        }
        if config.access_token.trim().is_empty() {
            return Err(DeliveryError::Config(
                "access token must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.send_timeout)
            .build()
            .map_err(|e| DeliveryError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Endpoint for posting an `m.room.message` event into a room
    fn send_url(&self, room: &RoomId) -> String {
        format!(
            "{}/_matrix/client/v3/rooms/{}/send/m.room.message",
            self.config.homeserver.trim_end_matches('/'),
            encode_path_segment(room.as_str())
        )
    }
}

#[async_trait]
impl MessageDelivery for MatrixClient {
    async fn deliver(&self, room: &RoomId, message: &ChatMessage) -> Result<(), DeliveryError> {
        let url = self.send_url(room);
        debug!(room = %room, "sending message to homeserver");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&RoomMessage::from(message))
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::api(status.as_u16(), body));
        }

        debug!(room = %room, status = status.as_u16(), "homeserver accepted message");
        Ok(())
    }
}

/// Percent-encode one path segment
///
/// Room IDs start with `!` and contain `:`, both of which must not appear
/// raw inside a path segment.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
