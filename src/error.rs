use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::value::{Kind, Value};

/// The single failure kind in this crate: a precondition violation, reported
/// by a validated helper before it computes anything.
///
/// The message is fully determined by the four fields:
/// `<function>(): expected <expected>, but received <kind>`.
#[derive(Debug, Clone, Error)]
#[error("{function}(): expected {expected}, but received {kind}")]
pub struct InvalidArgument {
    /// Name of the operation whose precondition was violated.
    pub function: &'static str,
    /// Human-readable description of the expected shape.
    pub expected: String,
    /// The offending value, owned by the report.
    pub received: Value,
    /// Runtime category of the offending value.
    pub kind: Kind,
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvalidArgumentDetails<'a> {
    function: &'a str,
    expected: &'a str,
    received_kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    received: Option<JsonValue>,
}

impl InvalidArgument {
    pub fn new(function: &'static str, expected: impl Into<String>, received: &Value) -> Self {
        Self {
            function,
            expected: expected.into(),
            kind: received.kind(),
            received: received.clone(),
        }
    }

    pub fn code(&self) -> &'static str {
        "validation.invalid_argument"
    }

    /// Structured details for machine consumers, camelCase keys.
    ///
    /// `received` is omitted when the offending value has no JSON rendering
    /// (opaque handles and undefined).
    pub fn details(&self) -> JsonValue {
        serde_json::to_value(InvalidArgumentDetails {
            function: self.function,
            expected: &self.expected,
            received_kind: self.kind.as_str(),
            received: self.received.to_json(),
        })
        .unwrap_or_else(|_| JsonValue::Object(serde_json::Map::new()))
    }
}
