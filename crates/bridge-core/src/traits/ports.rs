//! Capability traits (ports) - define the interfaces the pipeline is built on
//!
//! The domain layer defines what it needs; the transform and delivery layers
//! provide the implementations.

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::ChatMessage;
use crate::error::{DeliveryError, EvalError};
use crate::value_objects::RoomId;

/// A per-source transform: payload JSON in, message JSON or `null` out
///
/// Implementations are pure functions of the payload: no I/O, no clock, no
/// shared mutable state. Returning `Value::Null` suppresses the event;
/// any other value must deserialize into a [`ChatMessage`] with both
/// renderings populated. Violations are caught by the engine, not here.
pub trait Mapping: std::fmt::Debug + Send + Sync {
    /// Evaluate this mapping against a parsed webhook payload
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError>;
}

/// Outbound delivery capability for canonical messages
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Deliver a message to a room
    ///
    /// Exactly one attempt per call. Retry policy, if a deployment wants
    /// one, wraps this trait from outside.
    async fn deliver(&self, room: &RoomId, message: &ChatMessage)
        -> Result<(), DeliveryError>;
}
