//! The output envelope: success records and structured error payloads.
//!
//! An output record carries either `"success": true` (plus any
//! operation-specific fields) or an `"error"` object, never both.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structured error carried in the `error` arm of the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Build the error arm of the envelope.
pub fn error_output(code: &str, message: impl Into<String>) -> Value {
    json!({ "error": ErrorPayload::new(code, message) })
}

/// Build a bare success record.
pub fn success_output() -> Value {
    json!({ "success": true })
}

/// Build a success record with a human-readable message.
pub fn success_message(message: impl Into<String>) -> Value {
    json!({ "success": true, "message": message.into() })
}

/// Build a success record whose payload sits under `returnValue`.
pub fn success_value(value: impl Serialize) -> Value {
    json!({ "success": true, "returnValue": value })
}

/// Merge `"success": true` into a serialized result record.
///
/// Results are flat objects produced by derived serializers, so the
/// conversion cannot fail in practice.
pub fn success_with(result: impl Serialize) -> Value {
    let mut output = match serde_json::to_value(result) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    output.insert("success".to_string(), Value::Bool(true));
    Value::Object(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn success_record_has_no_error_field() {
        let output = success_message("Directory /tmp/x was created");
        assert_eq!(output["success"], true);
        assert_eq!(output["message"], "Directory /tmp/x was created");
        assert!(output.get("error").is_none());
    }

    #[test]
    fn error_record_has_no_success_field() {
        let output = error_output("NE_FS_NOPATHE", "File not found: /missing");
        assert_eq!(output["error"]["code"], "NE_FS_NOPATHE");
        assert_eq!(output["error"]["message"], "File not found: /missing");
        assert!(output.get("success").is_none());
    }

    #[test]
    fn success_value_nests_under_return_value() {
        let output = success_value("payload");
        assert_eq!(output["success"], true);
        assert_eq!(output["returnValue"], "payload");
    }

    #[test]
    fn success_with_merges_result_fields() {
        #[derive(Serialize)]
        struct Sample {
            size: u64,
        }

        let output = success_with(Sample { size: 42 });
        assert_eq!(output["success"], true);
        assert_eq!(output["size"], 42);
    }

    #[test]
    fn error_payload_round_trips() {
        let payload = ErrorPayload::new("NE_FS_FILRDER", "File not found: /x");
        let json_str = serde_json::to_string(&payload).unwrap();
        let parsed: ErrorPayload = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.code, "NE_FS_FILRDER");
        assert_eq!(parsed.message, "File not found: /x");
    }
}
