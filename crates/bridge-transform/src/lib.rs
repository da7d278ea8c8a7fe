//! # bridge-transform
//!
//! Application layer: the mapping registry and the transformation engine
//! that turn raw webhook payloads into canonical chat messages.

pub mod engine;
pub mod mappings;
pub mod registry;

// Re-export commonly used types at crate root
pub use engine::TransformEngine;
pub use registry::MappingRegistry;
