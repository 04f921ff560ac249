//! # lenient-json
//!
//! Tolerant field decoding for JSON produced by servers whose schema drifts:
//! `"1"` where a boolean was declared, `42` where a string was declared, and
//! so on.
//!
//! Two decoding philosophies are offered side by side:
//!
//! - **Never-fail coercion** converts any scalar to `bool`, `i64`, `f64` or
//!   `String` using a fixed preference order, falling back to a zero value.
//! - **Strict decode or default** deserializes a field as exactly `T` and
//!   substitutes a caller-supplied default on mismatch.
//!
//! ## Quick start
//!
//! ```rust
//! use lenient_json::FieldLookup;
//!
//! let user = FieldLookup::from_json_str(r#"{"id":"42","admin":"y","score":7}"#).unwrap();
//!
//! assert_eq!(user.int("id"), 42);
//! assert!(user.bool("admin"));
//! assert_eq!(user.string("score"), "7");
//! assert_eq!(user.int_if_present("missing"), None);
//! assert_eq!(user.decode_or("id", 0_i64), 0); // "42" is not an integer
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `JsonValue` scalar union and `TargetKind`
//! - [`coerce`] — Per-type coercion rules and the `Coerce` trait
//! - [`lookup`] — `FieldLookup`: per-field lenient, presence-aware, strict and date access
//! - [`strict`] — Strict decode with default over a bare `serde_json::Value`
//! - [`date`] — `DateFormatter` capability and bundled formatters
//! - [`de`] — serde `deserialize_with` helpers and the `Lenient<T>` wrapper
//! - [`error`] — Error types for lookup construction and strict decoding

pub mod coerce;
pub mod date;
pub mod de;
pub mod error;
pub mod lookup;
pub mod strict;
pub mod value;

pub use coerce::{
    coerce, coerce_bool, coerce_double, coerce_int, coerce_json, coerce_string, Coerce, Coerced,
};
pub use date::{
    decode_date, DateFormatter, LocalTimePolicy, PatternFormatter, Rfc3339Formatter,
    TimestampUnit, UnixTimestampFormatter,
};
pub use error::LenientError;
pub use lookup::FieldLookup;
pub use value::{JsonValue, TargetKind};
