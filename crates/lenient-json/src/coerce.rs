//! Never-fail coercion of JSON scalars into strictly-typed values.
//!
//! Each target type has a fixed preference order over the source variants.
//! When no rule applies the coercer returns the target's zero value
//! (`false`, `0`, `0.0`, `""`) instead of an error.
//!
//! | target   | order                                                   | zero    |
//! |----------|---------------------------------------------------------|---------|
//! | `bool`   | bool, number (truncated != 0), string literal set       | `false` |
//! | `i64`    | number (truncated), integer-literal string, bool (1/0)  | `0`     |
//! | `f64`    | number, float-literal string, bool (1.0/0.0)            | `0.0`   |
//! | `String` | string, number (decimal text), bool (`"true"`/`"false"`) | `""`    |
//!
//! Integer coercion parses strings as integer literals only: `"3.5"` does
//! not fall back to float parsing and coerces to `0`.
//!
//! [`JsonValue`] carries numbers as `f64`. Callers holding the parsed
//! `serde_json::Value` should go through [`coerce_json`] or
//! [`Coerce::coerce_json`], which keep integers beyond 2^53 exact for the
//! `i64` and `String` targets.

use crate::value::{JsonValue, TargetKind};
use serde_json::Value;

/// Lowercase string spellings that coerce to `true`.
const TRUE_LITERALS: [&str; 4] = ["1", "true", "y", "t"];

/// Coerce a JSON scalar to `bool`.
///
/// Numbers are truncated toward zero before the nonzero test, so `0.4` is
/// `false` and `-1.7` is `true`. Strings are matched case-insensitively
/// against `"1"`, `"true"`, `"y"` and `"t"`.
///
/// # Examples
///
/// ```
/// use lenient_json::{coerce_bool, JsonValue};
///
/// assert!(coerce_bool(&JsonValue::from("Y")));
/// assert!(!coerce_bool(&JsonValue::Number(0.4)));
/// assert!(!coerce_bool(&JsonValue::Null));
/// ```
pub fn coerce_bool(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => truncate(*n) != 0,
        JsonValue::String(s) => {
            let folded = s.to_lowercase();
            TRUE_LITERALS.contains(&folded.as_str())
        }
        JsonValue::Null => {
            fell_back(value, TargetKind::Bool);
            false
        }
    }
}

/// Coerce a JSON scalar to `i64`.
///
/// Numbers are truncated toward zero and saturate at the `i64` range; NaN
/// becomes `0`. Strings must parse completely as an integer literal.
///
/// # Examples
///
/// ```
/// use lenient_json::{coerce_int, JsonValue};
///
/// assert_eq!(coerce_int(&JsonValue::from("42")), 42);
/// assert_eq!(coerce_int(&JsonValue::from("3.5")), 0);
/// assert_eq!(coerce_int(&JsonValue::Bool(true)), 1);
/// ```
pub fn coerce_int(value: &JsonValue) -> i64 {
    match value {
        JsonValue::Number(n) => return truncate(*n),
        JsonValue::String(s) => {
            if let Ok(i) = s.parse::<i64>() {
                return i;
            }
        }
        JsonValue::Bool(b) => return i64::from(*b),
        JsonValue::Null => {}
    }
    fell_back(value, TargetKind::Int);
    0
}

/// Coerce a JSON scalar to `f64`.
///
/// Strings must parse completely as a floating-point literal (`"1e3"`,
/// `"-0.5"`, `"inf"` are all accepted by Rust's float grammar).
///
/// # Examples
///
/// ```
/// use lenient_json::{coerce_double, JsonValue};
///
/// assert_eq!(coerce_double(&JsonValue::from("3.5")), 3.5);
/// assert_eq!(coerce_double(&JsonValue::Bool(false)), 0.0);
/// ```
pub fn coerce_double(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => return *n,
        JsonValue::String(s) => {
            if let Ok(f) = s.parse::<f64>() {
                return f;
            }
        }
        JsonValue::Bool(b) => return if *b { 1.0 } else { 0.0 },
        JsonValue::Null => {}
    }
    fell_back(value, TargetKind::Double);
    0.0
}

/// Coerce a JSON scalar to `String`.
///
/// Numbers render in their shortest decimal form (`42.0` becomes `"42"`).
///
/// # Examples
///
/// ```
/// use lenient_json::{coerce_string, JsonValue};
///
/// assert_eq!(coerce_string(&JsonValue::Number(42.0)), "42");
/// assert_eq!(coerce_string(&JsonValue::Bool(true)), "true");
/// assert_eq!(coerce_string(&JsonValue::Null), "");
/// ```
pub fn coerce_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => {
            fell_back(value, TargetKind::String);
            String::new()
        }
    }
}

/// Result of a coercion selected at runtime by [`TargetKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Coerced {
    /// The kind this value was coerced to.
    pub fn kind(&self) -> TargetKind {
        match self {
            Coerced::Bool(_) => TargetKind::Bool,
            Coerced::Int(_) => TargetKind::Int,
            Coerced::Double(_) => TargetKind::Double,
            Coerced::String(_) => TargetKind::String,
        }
    }
}

/// Coerce `value` to the scalar type named by `kind`.
pub fn coerce(value: &JsonValue, kind: TargetKind) -> Coerced {
    match kind {
        TargetKind::Bool => Coerced::Bool(coerce_bool(value)),
        TargetKind::Int => Coerced::Int(coerce_int(value)),
        TargetKind::Double => Coerced::Double(coerce_double(value)),
        TargetKind::String => Coerced::String(coerce_string(value)),
    }
}

/// Coerce a parsed JSON value to the scalar type named by `kind`.
///
/// Same rules as [`coerce`], but integer literals stay exact for the `Int`
/// and `String` targets.
///
/// ```
/// use lenient_json::{coerce_json, Coerced, TargetKind};
/// use serde_json::json;
///
/// let id = json!(1234567890123456789_i64);
/// assert_eq!(coerce_json(&id, TargetKind::String), Coerced::String("1234567890123456789".into()));
/// ```
pub fn coerce_json(value: &Value, kind: TargetKind) -> Coerced {
    match kind {
        TargetKind::Bool => Coerced::Bool(bool::coerce_json(value)),
        TargetKind::Int => Coerced::Int(i64::coerce_json(value)),
        TargetKind::Double => Coerced::Double(f64::coerce_json(value)),
        TargetKind::String => Coerced::String(String::coerce_json(value)),
    }
}

/// A scalar type the coercer can produce.
///
/// Implemented for `bool`, `i64`, `f64` and `String`. Lets generic callers
/// such as [`FieldLookup::coerce`](crate::FieldLookup::coerce) and
/// [`Lenient`](crate::de::Lenient) pick the coercion by type.
pub trait Coerce: Sized {
    /// The runtime tag for this type.
    const KIND: TargetKind;

    /// Value returned when no coercion rule applies.
    fn zero() -> Self;

    /// Coerce a scalar into `Self`. Never fails.
    fn coerce(value: &JsonValue) -> Self;

    /// Coerce a parsed JSON value into `Self`. Never fails.
    ///
    /// Defaults to the scalar view; targets that can lose integer digits
    /// through `f64` override it.
    fn coerce_json(value: &Value) -> Self {
        Self::coerce(&JsonValue::from(value))
    }
}

impl Coerce for bool {
    const KIND: TargetKind = TargetKind::Bool;

    fn zero() -> Self {
        false
    }

    fn coerce(value: &JsonValue) -> Self {
        coerce_bool(value)
    }
}

impl Coerce for i64 {
    const KIND: TargetKind = TargetKind::Int;

    fn zero() -> Self {
        0
    }

    fn coerce(value: &JsonValue) -> Self {
        coerce_int(value)
    }

    fn coerce_json(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.is_i64() => n.as_i64().unwrap_or_default(),
            // Above i64::MAX: saturate, as the f64 path does.
            Value::Number(n) if n.is_u64() => i64::MAX,
            other => coerce_int(&JsonValue::from(other)),
        }
    }
}

impl Coerce for f64 {
    const KIND: TargetKind = TargetKind::Double;

    fn zero() -> Self {
        0.0
    }

    fn coerce(value: &JsonValue) -> Self {
        coerce_double(value)
    }
}

impl Coerce for String {
    const KIND: TargetKind = TargetKind::String;

    fn zero() -> Self {
        String::new()
    }

    fn coerce(value: &JsonValue) -> Self {
        coerce_string(value)
    }

    fn coerce_json(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            other => coerce_string(&JsonValue::from(other)),
        }
    }
}

/// Truncate toward zero. `as` saturates at the `i64` bounds and maps NaN to 0.
fn truncate(n: f64) -> i64 {
    n.trunc() as i64
}

fn fell_back(value: &JsonValue, kind: TargetKind) {
    tracing::trace!(from = value.type_name(), to = %kind, "coerced to zero value");
}
