//! Chat message entity - the canonical rendering every source converges to

use serde::{Deserialize, Serialize};

/// Canonical chat message produced by a mapping
///
/// Both renderings are always populated: `plain` for clients without rich
/// formatting, `html` for clients that render it. A message with an empty
/// rendering is rejected before delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub plain: String,
    pub html: String,
}

impl ChatMessage {
    /// Create a new ChatMessage
    pub fn new(plain: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            html: html.into(),
        }
    }

    /// Check that both renderings carry content
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.plain.trim().is_empty() && !self.html.trim().is_empty()
    }

    /// Get a truncated preview of the plain rendering (for log lines)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.plain.len() <= max_len {
            &self.plain
        } else {
            let mut end = max_len;
            while !self.plain.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.plain[..end]
        }
    }
}
