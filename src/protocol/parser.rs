//! Request line parsing
//!
//! Decoding happens in two steps so the access key can be checked before
//! anything else about the request is interpreted.

use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::commands::Request;

/// Parses one request line into a JSON object.
pub fn parse_line(line: &str) -> Result<Value, ProtocolError> {
    let value: Value = serde_json::from_str(line.trim())
        .map_err(|e| ProtocolError::MalformedRequest(e.to_string()))?;

    if !value.is_object() {
        return Err(ProtocolError::MalformedRequest(
            "request must be a JSON object".into(),
        ));
    }

    Ok(value)
}

/// Returns the access key of a parsed request, if it is a string.
pub fn extract_key(value: &Value) -> Option<&str> {
    value.get("key").and_then(Value::as_str)
}

/// Returns the operation name of a parsed request, for logging.
pub fn extract_op(value: &Value) -> Option<&str> {
    value.get("op").and_then(Value::as_str)
}

/// Decodes the typed request once the key has been accepted.
pub fn decode_request(value: Value) -> Result<Request, ProtocolError> {
    serde_json::from_value(value).map_err(|e| ProtocolError::MalformedRequest(e.to_string()))
}
