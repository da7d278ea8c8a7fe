//! Transformation pipeline errors
//!
//! Every variant is recoverable: the dispatcher reports it to the caller and
//! the process keeps serving. Suppression is not an error and never appears
//! here.

use thiserror::Error;

use crate::value_objects::{SourceType, SourceTypeParseError};

/// Errors from evaluating a single mapping against a payload
///
/// Carried inside [`TransformError::Evaluation`] so the log line can name
/// the exact field or parse fault without the caller matching on it.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("field {field} has wrong type, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

impl EvalError {
    /// Create a missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a wrong-type error
    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
        }
    }
}

/// Errors from the transformation pipeline
#[derive(Debug, Error)]
pub enum TransformError {
    // =========================================================================
    // Resolution Errors (the request named something we do not serve)
    // =========================================================================
    #[error("unknown source type: {0}")]
    UnknownSourceType(String),

    #[error("no mapping registered for source type: {0}")]
    MappingUnavailable(SourceType),

    // =========================================================================
    // Evaluation Errors (the payload did not fit the mapping)
    // =========================================================================
    #[error("mapping for {source_type} failed to evaluate: {cause}")]
    Evaluation {
        source_type: SourceType,
        #[source]
        cause: EvalError,
    },

    // =========================================================================
    // Contract Violations (the mapping itself produced bad output)
    // =========================================================================
    #[error("mapping for {source_type} produced invalid output: {reason}")]
    MalformedOutput {
        source_type: SourceType,
        reason: String,
    },
}

impl TransformError {
    /// Create an evaluation error
    pub fn evaluation(source_type: SourceType, cause: EvalError) -> Self {
        Self::Evaluation { source_type, cause }
    }

    /// Create a malformed-output error
    pub fn malformed_output(source_type: SourceType, reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            source_type,
            reason: reason.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownSourceType(_) => "UNKNOWN_SOURCE_TYPE",
            Self::MappingUnavailable(_) => "MAPPING_UNAVAILABLE",
            Self::Evaluation { .. } => "EVALUATION_ERROR",
            Self::MalformedOutput { .. } => "MALFORMED_OUTPUT",
        }
    }

    /// Check if the request named a source the bridge does not serve
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::UnknownSourceType(_) | Self::MappingUnavailable(_)
        )
    }
}

impl From<SourceTypeParseError> for TransformError {
    fn from(err: SourceTypeParseError) -> Self {
        Self::UnknownSourceType(err.0)
    }
}

/// Errors from delivering a message to the chat backend
///
/// Infrastructure details (HTTP client errors) arrive as strings so this
/// crate stays free of the outbound stack.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery request failed: {0}")]
    Request(String),

    #[error("chat backend rejected message: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid delivery configuration: {0}")]
    Config(String),
}

impl DeliveryError {
    /// Create an API rejection error, keeping the response body for the log
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Request(_) | Self::Api { .. } => "DELIVERY_FAILED",
            Self::Config(_) => "DELIVERY_MISCONFIGURED",
        }
    }
}
