//! Field access over one decoded JSON object.
//!
//! [`FieldLookup`] is the caller-facing surface: it owns the object's direct
//! members and exposes every decoding style per field name.
//!
//! - **Lenient** (`bool`, `int`, `double`, `string`, `coerce::<T>`): never
//!   fails, absent keys yield the zero value.
//! - **Lenient, presence-aware** (`*_if_present`, `coerce_if_present::<T>`):
//!   `None` only when the key is absent. A present key holding an
//!   uncoercible value still yields `Some(zero)`.
//! - **Strict with default** (`decode_or`, `decode_or_else`): exact serde
//!   decode, default on any failure.
//! - **Strict with error** (`decode`, `decode_if_present`): exact serde
//!   decode, errors name the field.
//! - **Date** (`date`): string field through a [`DateFormatter`].

use crate::coerce::{self, Coerce, Coerced};
use crate::date::{decode_date, DateFormatter};
use crate::error::{LenientError, Result};
use crate::strict;
use crate::value::{JsonValue, TargetKind};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Read-only view of a JSON object's members, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldLookup {
    fields: Map<String, Value>,
}

impl FieldLookup {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a parsed JSON value, which must be an object.
    ///
    /// # Errors
    /// Returns `LenientError::NotAnObject` for any other JSON type.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(LenientError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Parse JSON text into a lookup.
    ///
    /// # Errors
    /// Returns `LenientError::JsonParse` for malformed text and
    /// `LenientError::NotAnObject` if the root is not an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `key` exists, regardless of its value (including `null`).
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The member's scalar view, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.fields.get(key).map(JsonValue::from)
    }

    /// The member exactly as parsed, containers included.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    // -----------------------------------------------------------------------
    // Lenient coercion
    // -----------------------------------------------------------------------

    /// Coerce the member to `T`. Absent keys coerce like `null`.
    pub fn coerce<T: Coerce>(&self, key: &str) -> T {
        match self.fields.get(key) {
            Some(value) => T::coerce_json(value),
            None => {
                let to = T::KIND;
                tracing::trace!(field = key, to = %to, "field absent");
                T::zero()
            }
        }
    }

    /// Coerce the member to `T` if the key exists.
    pub fn coerce_if_present<T: Coerce>(&self, key: &str) -> Option<T> {
        self.fields.get(key).map(T::coerce_json)
    }

    /// Coerce the member to a kind chosen at runtime.
    pub fn coerce_kind(&self, key: &str, kind: TargetKind) -> Coerced {
        coerce::coerce_json(self.fields.get(key).unwrap_or(&Value::Null), kind)
    }

    pub fn bool(&self, key: &str) -> bool {
        self.coerce(key)
    }

    pub fn int(&self, key: &str) -> i64 {
        self.coerce(key)
    }

    pub fn double(&self, key: &str) -> f64 {
        self.coerce(key)
    }

    pub fn string(&self, key: &str) -> String {
        self.coerce(key)
    }

    pub fn bool_if_present(&self, key: &str) -> Option<bool> {
        self.coerce_if_present(key)
    }

    pub fn int_if_present(&self, key: &str) -> Option<i64> {
        self.coerce_if_present(key)
    }

    pub fn double_if_present(&self, key: &str) -> Option<f64> {
        self.coerce_if_present(key)
    }

    pub fn string_if_present(&self, key: &str) -> Option<String> {
        self.coerce_if_present(key)
    }

    // -----------------------------------------------------------------------
    // Strict decode
    // -----------------------------------------------------------------------

    /// Strictly decode the member as `T`, falling back to `default` when the
    /// key is absent or the value does not match `T` exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_json::FieldLookup;
    ///
    /// let lookup = FieldLookup::from_json_str(r#"{"n":"5","tags":["a"]}"#).unwrap();
    /// assert_eq!(lookup.decode_or("n", 9_i64), 9);
    /// assert_eq!(lookup.decode_or("tags", Vec::<String>::new()), vec!["a"]);
    /// ```
    pub fn decode_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.decode_or_else(key, || default)
    }

    /// Like [`FieldLookup::decode_or`], building the default only when needed.
    pub fn decode_or_else<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.fields.get(key) {
            Some(value) => strict::decode_or_else(value, default),
            None => {
                tracing::debug!(field = key, "field absent, using default");
                default()
            }
        }
    }

    /// Strictly decode the member as `T`.
    ///
    /// # Errors
    /// `LenientError::MissingField` if the key is absent,
    /// `LenientError::Field` if the value does not decode as `T`.
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| LenientError::MissingField {
                field: key.to_string(),
            })?;
        strict::try_decode(value).map_err(|source| LenientError::Field {
            field: key.to_string(),
            source,
        })
    }

    /// Strictly decode the member as `T`; absent keys and `null` give `None`.
    ///
    /// # Errors
    /// `LenientError::Field` if a non-null value does not decode as `T`.
    pub fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => strict::try_decode(value)
                .map(Some)
                .map_err(|source| LenientError::Field {
                    field: key.to_string(),
                    source,
                }),
        }
    }

    // -----------------------------------------------------------------------
    // Dates
    // -----------------------------------------------------------------------

    /// Decode a string member through `formatter`. See [`decode_date`].
    pub fn date<F>(&self, key: &str, formatter: &F) -> Option<DateTime<Utc>>
    where
        F: DateFormatter + ?Sized,
    {
        decode_date(self, key, formatter)
    }
}

impl From<Map<String, Value>> for FieldLookup {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl TryFrom<Value> for FieldLookup {
    type Error = LenientError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl FromStr for FieldLookup {
    type Err = LenientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
