//! Scalar view over parsed JSON used by the coercer.
//!
//! The coercer only ever reasons about four shapes: null, boolean, number and
//! string. [`JsonValue`] is that closed set. Containers coming from a full
//! `serde_json::Value` tree collapse to [`JsonValue::Null`] because no
//! scalar target can be produced from them.

use serde_json::Value;
use std::fmt;

/// A JSON scalar. Numbers are carried as `f64` regardless of how they were
/// written in the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl JsonValue {
    /// Short name of the variant, used in log events.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => JsonValue::Bool(*b),
            // `as_f64` only returns `None` for arbitrary-precision numbers,
            // which the workspace never enables.
            Value::Number(n) => n.as_f64().map_or(JsonValue::Null, JsonValue::Number),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => JsonValue::Null,
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => JsonValue::String(s),
            other => JsonValue::from(&other),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Number(n as f64)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(JsonValue::Null, Into::into)
    }
}

/// The scalar type a caller asks the coercer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Bool,
    Int,
    Double,
    String,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Bool => "bool",
            TargetKind::Int => "int",
            TargetKind::Double => "double",
            TargetKind::String => "string",
        };
        f.write_str(name)
    }
}

