//! # bridge-core
//!
//! Domain layer containing the canonical chat message, source type and room
//! identifiers, error taxonomy, and the transform/delivery traits.
//! This crate has zero dependencies on infrastructure (HTTP stack, chat backend, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::ChatMessage;
pub use error::{DeliveryError, EvalError, TransformError};
pub use traits::{Mapping, MessageDelivery};
pub use value_objects::{RoomId, RoomIdError, SourceType, SourceTypeParseError};
