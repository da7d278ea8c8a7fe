//! `m.room.message` event content

use bridge_core::ChatMessage;
use serde::Serialize;

/// Event content for a formatted text message
///
/// Matrix clients that understand `org.matrix.custom.html` render
/// `formatted_body`; everything else falls back to the plain `body`.
#[derive(Debug, Clone, Serialize)]
pub struct RoomMessage {
    pub msgtype: &'static str,
    pub body: String,
    pub format: &'static str,
    pub formatted_body: String,
}

impl From<&ChatMessage> for RoomMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            msgtype: "m.text",
            body: message.plain.clone(),
            format: "org.matrix.custom.html",
            formatted_body: message.html.clone(),
        }
    }
}
