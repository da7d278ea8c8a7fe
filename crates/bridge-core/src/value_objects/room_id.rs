//! Room ID - opaque identifier of the chat room a message is addressed to
//!
//! The bridge stays format-agnostic: the chat backend decides what a valid
//! room is. Only emptiness is rejected here, so a missing query parameter
//! fails fast at the HTTP boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target chat room, taken per request from the webhook URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Create a RoomId, rejecting empty or whitespace-only input
    pub fn new(raw: impl Into<String>) -> Result<Self, RoomIdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RoomIdError::Empty);
        }
        Ok(Self(raw))
    }

    /// Get the inner string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when constructing a RoomId
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoomIdError {
    #[error("room id must not be empty")]
    Empty,
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RoomId {
    type Err = RoomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomId::new(s)
    }
}
