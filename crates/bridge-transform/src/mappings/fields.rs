//! JSON field access helpers shared by the mappings
//!
//! Unguarded access to a missing or ill-typed field is an evaluation fault;
//! these helpers produce the diagnostic that names the field.

use bridge_core::EvalError;
use serde_json::Value;

/// Fetch a required string field from an object
pub fn str_field<'a>(value: &'a Value, field: &str) -> Result<&'a str, EvalError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(EvalError::wrong_type(field, "string")),
        None => Err(EvalError::missing(field)),
    }
}

/// Fetch an optional string field; absent, null, or non-string yields None
pub fn opt_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}

/// Fetch a required object field
pub fn obj_field<'a>(value: &'a Value, field: &str) -> Result<&'a Value, EvalError> {
    match value.get(field) {
        Some(v) if v.is_object() => Ok(v),
        Some(_) => Err(EvalError::wrong_type(field, "object")),
        None => Err(EvalError::missing(field)),
    }
}

/// Fetch a required array field
pub fn arr_field<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], EvalError> {
    match value.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(EvalError::wrong_type(field, "array")),
        None => Err(EvalError::missing(field)),
    }
}

/// Fetch an optional array field; absent or null yields an empty slice
pub fn opt_arr<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], EvalError> {
    match value.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(Value::Null) | None => Ok(&[]),
        Some(_) => Err(EvalError::wrong_type(field, "array")),
    }
}

/// Fetch a required unsigned integer field
pub fn u64_field(value: &Value, field: &str) -> Result<u64, EvalError> {
    match value.get(field) {
        Some(v) => v
            .as_u64()
            .ok_or_else(|| EvalError::wrong_type(field, "number")),
        None => Err(EvalError::missing(field)),
    }
}

/// Fetch an optional boolean field; absent or null yields `false`
pub fn flag(value: &Value, field: &str) -> bool {
    value.get(field).and_then(Value::as_bool).unwrap_or(false)
}

/// Escape payload text for interpolation into the HTML rendering
///
/// Webhook payloads are attacker-influenced input; anything placed inside
/// markup or an attribute goes through here first.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
