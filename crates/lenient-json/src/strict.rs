//! Strict decode with a caller-supplied fallback.
//!
//! Unlike [`crate::coerce`], nothing here converts across types: the value
//! must deserialize as `T` exactly. On mismatch the caller's default is
//! returned and the serde error is only logged.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode `value` as `T`, or return `default` if it does not match.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use lenient_json::strict::decode_or;
///
/// assert_eq!(decode_or(&json!(5), 9_i64), 5);
/// assert_eq!(decode_or(&json!("5"), 9_i64), 9);
/// ```
pub fn decode_or<T: DeserializeOwned>(value: &Value, default: T) -> T {
    decode_or_else(value, || default)
}

/// Decode `value` as `T`, or call `default` if it does not match.
///
/// `default` runs only on the failure path.
pub fn decode_or_else<T, F>(value: &Value, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match try_decode(value) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::debug!(error = %err, "strict decode failed, using default");
            default()
        }
    }
}

/// Decode `value` as `T` without copying the tree.
pub(crate) fn try_decode<T: DeserializeOwned>(value: &Value) -> serde_json::Result<T> {
    T::deserialize(value)
}
