//! serde integration for the coercer.
//!
//! Attach a helper to a field with `deserialize_with`:
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Account {
//!     #[serde(deserialize_with = "lenient_json::de::int")]
//!     id: i64,
//!     #[serde(default, deserialize_with = "lenient_json::de::bool")]
//!     active: bool,
//!     #[serde(default, deserialize_with = "lenient_json::de::option_string")]
//!     nickname: Option<String>,
//! }
//!
//! let account: Account = serde_json::from_str(r#"{"id":"17","active":"Y"}"#).unwrap();
//! assert_eq!(account.id, 17);
//! assert!(account.active);
//! assert_eq!(account.nickname, None);
//! ```
//!
//! `deserialize_with` is only called for keys that are present. Pair the
//! plain helpers with `#[serde(default)]` to turn absent keys into the zero
//! value, and the `option_*` helpers with `#[serde(default)]` to turn absent
//! keys into `None`.
//!
//! The helpers read the field as a `serde_json::Value` first, so the
//! deserializer must be self-describing.

use crate::coerce::Coerce;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Coerce,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::coerce_json(&value))
}

pub fn bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    lenient(deserializer)
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient(deserializer)
}

pub fn double<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    lenient(deserializer)
}

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient(deserializer)
}

pub fn option_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    lenient(deserializer).map(Some)
}

pub fn option_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    lenient(deserializer).map(Some)
}

pub fn option_double<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    lenient(deserializer).map(Some)
}

pub fn option_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    lenient(deserializer).map(Some)
}

/// A field that deserializes through the coercer instead of strictly.
///
/// Serializes as the inner value.
///
/// ```
/// use lenient_json::de::Lenient;
///
/// let n: Lenient<i64> = serde_json::from_str("\"42\"").unwrap();
/// assert_eq!(*n, 42);
/// let v: Vec<Lenient<bool>> = serde_json::from_str(r#"[1, "t", "no", null]"#).unwrap();
/// assert_eq!(v, [Lenient(true), Lenient(true), Lenient(false), Lenient(false)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Lenient<T>(pub T);

impl<T> Lenient<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Lenient<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Lenient<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<'de, T: Coerce> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient(deserializer).map(Lenient)
    }
}

impl<T: Serialize> Serialize for Lenient<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
