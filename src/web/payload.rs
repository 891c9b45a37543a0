use axum::body::Bytes;
use serde_json::Value;

/// Parses a request body as arbitrary JSON, leaving field checks to the caller.
pub fn parse_json_body(body: &Bytes) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Loose truthiness for presence checks: absent, `null`, `false`, zero and the
/// empty string all count as "not supplied".
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
