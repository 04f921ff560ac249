//! Error types for lookup construction and strict field decoding.
//!
//! The coercion entry points never fail. Only building a [`FieldLookup`] from
//! raw input, building a date formatter, and the error-returning strict
//! helpers ([`FieldLookup::decode`], [`FieldLookup::decode_if_present`])
//! produce these errors.
//!
//! [`FieldLookup`]: crate::FieldLookup
//! [`FieldLookup::decode`]: crate::FieldLookup::decode
//! [`FieldLookup::decode_if_present`]: crate::FieldLookup::decode_if_present

use thiserror::Error;

/// Errors that can occur while building a lookup or strictly decoding a field.
#[derive(Error, Debug)]
pub enum LenientError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A lookup was requested over a JSON value that is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A strict decode asked for a field the object does not contain.
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A strict decode found the field but its value has the wrong shape.
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A date pattern contains a specifier chrono cannot interpret.
    #[error("invalid date pattern: {0}")]
    InvalidPattern(String),

    /// A timezone name is not a known IANA identifier.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Convenience alias used throughout lenient-json.
pub type Result<T> = std::result::Result<T, LenientError>;
