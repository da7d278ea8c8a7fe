//! Transformation engine
//!
//! Parse, evaluate, classify: a payload either becomes a complete message,
//! a suppression, or a typed error. The engine is synchronous and does no
//! I/O; the same input always produces the same output.

use bridge_core::{ChatMessage, EvalError, SourceType, TransformError};
use serde_json::Value;
use tracing::debug;

use crate::registry::MappingRegistry;

/// Transformation engine driving the mapping registry
pub struct TransformEngine {
    registry: MappingRegistry,
}

impl TransformEngine {
    /// Create an engine over a registry
    pub fn new(registry: MappingRegistry) -> Self {
        Self { registry }
    }

    /// Create an engine with every built-in mapping registered
    pub fn builtin() -> Self {
        Self::new(MappingRegistry::builtin())
    }

    /// Transform a raw webhook payload into a canonical message
    ///
    /// Returns `Ok(Some(message))` for a deliverable message, `Ok(None)`
    /// when the mapping suppressed the event, and `Err` for everything the
    /// caller should report: unknown source, unloaded mapping, evaluation
    /// fault (including malformed payload JSON), or output that violates
    /// the message contract.
    pub fn transform(
        &self,
        source_type: SourceType,
        raw: &str,
    ) -> Result<Option<ChatMessage>, TransformError> {
        let mapping = self.registry.get(source_type)?;

        let payload: Value = serde_json::from_str(raw)
            .map_err(|e| TransformError::evaluation(source_type, EvalError::Json(e)))?;

        let output = mapping
            .evaluate(&payload)
            .map_err(|cause| TransformError::evaluation(source_type, cause))?;

        // `null` is the mapping's declared way to drop an event
        if output.is_null() {
            debug!(source_type = %source_type, "event suppressed by mapping");
            return Ok(None);
        }

        let message: ChatMessage = serde_json::from_value(output)
            .map_err(|e| TransformError::malformed_output(source_type, e.to_string()))?;

        if !message.is_complete() {
            return Err(TransformError::malformed_output(
                source_type,
                "plain and html renderings must both be non-empty",
            ));
        }

        Ok(Some(message))
    }

    /// Transform for a source named by its path identifier
    ///
    /// This is the entry point for dynamic input: an identifier that names
    /// no known source type fails before any mapping runs.
    pub fn transform_named(
        &self,
        source: &str,
        raw: &str,
    ) -> Result<Option<ChatMessage>, TransformError> {
        let source_type = SourceType::parse(source)?;
        self.transform(source_type, raw)
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }
}
