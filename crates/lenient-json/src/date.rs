//! Date decoding through an injectable formatter.
//!
//! A field holding a date is first read as a plain string, then handed to a
//! [`DateFormatter`]. Absent fields and unparseable text both produce `None`;
//! neither is an error.
//!
//! Three formatters ship with the crate:
//!
//! - [`Rfc3339Formatter`] -- `2025-06-15T09:00:00Z` style timestamps
//! - [`PatternFormatter`] -- a chrono `strftime` pattern evaluated in an IANA timezone
//! - [`UnixTimestampFormatter`] -- integer seconds or milliseconds since the epoch

use crate::error::{LenientError, Result};
use crate::lookup::FieldLookup;
use chrono::format::{Item, StrftimeItems};
use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

/// Two-way conversion between text and a UTC instant.
///
/// `parse` returns `None` for text the formatter does not understand.
/// Implementations should satisfy `parse(&format(d)) == Some(d)` for every
/// `d` at the precision they support.
pub trait DateFormatter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>>;
    fn format(&self, date: &DateTime<Utc>) -> String;
}

impl<F: DateFormatter + ?Sized> DateFormatter for &F {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        (**self).parse(text)
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        (**self).format(date)
    }
}

impl<F: DateFormatter + ?Sized> DateFormatter for Box<F> {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        (**self).parse(text)
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        (**self).format(date)
    }
}

/// Decode the date stored as a string under `key`.
///
/// Returns `None` when the key is absent, holds a non-string value, or the
/// formatter rejects the text.
///
/// # Examples
///
/// ```
/// use lenient_json::{decode_date, FieldLookup, Rfc3339Formatter};
///
/// let lookup = FieldLookup::from_json_str(r#"{"at":"2025-06-15T09:00:00Z"}"#).unwrap();
/// let at = decode_date(&lookup, "at", &Rfc3339Formatter::default()).unwrap();
/// assert_eq!(at.to_rfc3339(), "2025-06-15T09:00:00+00:00");
/// assert!(decode_date(&lookup, "missing", &Rfc3339Formatter::default()).is_none());
/// ```
pub fn decode_date<F>(lookup: &FieldLookup, key: &str, formatter: &F) -> Option<DateTime<Utc>>
where
    F: DateFormatter + ?Sized,
{
    let text = lookup.get_raw(key)?.as_str()?;
    let parsed = formatter.parse(text);
    if parsed.is_none() {
        tracing::debug!(field = key, text, "formatter rejected date text");
    }
    parsed
}

// ---------------------------------------------------------------------------
// RFC 3339
// ---------------------------------------------------------------------------

/// RFC 3339 timestamps. Parsing accepts any offset and normalizes to UTC;
/// formatting always writes `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rfc3339Formatter {
    precision: SecondsFormat,
}

impl Rfc3339Formatter {
    /// Format with a fixed number of fractional digits. Round-trips only
    /// dates that carry no finer precision.
    pub fn with_precision(precision: SecondsFormat) -> Self {
        Self { precision }
    }
}

impl Default for Rfc3339Formatter {
    /// Shortest fractional part that represents the instant exactly.
    fn default() -> Self {
        Self {
            precision: SecondsFormat::AutoSi,
        }
    }
}

impl DateFormatter for Rfc3339Formatter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        date.to_rfc3339_opts(self.precision, true)
    }
}

// ---------------------------------------------------------------------------
// strftime pattern + timezone
// ---------------------------------------------------------------------------

/// How a local wall-clock time that occurs twice (DST fall-back) is mapped
/// to an instant. Wall-clock times inside a DST gap never exist and always
/// fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalTimePolicy {
    /// Take the first occurrence.
    #[default]
    Earliest,
    /// Take the second occurrence.
    Latest,
    /// Treat the text as unparseable.
    Reject,
}

/// A chrono `strftime` pattern interpreted in a fixed IANA timezone.
///
/// Patterns carrying an offset (`%z`, `%:z`) honor the offset in the text.
/// Patterns without one read wall-clock time in `timezone`. Date-only
/// patterns such as `%Y-%m-%d` parse to local midnight.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    timezone: Tz,
    policy: LocalTimePolicy,
}

impl PatternFormatter {
    /// Build a formatter, rejecting patterns chrono cannot interpret.
    ///
    /// # Errors
    /// Returns `LenientError::InvalidPattern` if `pattern` contains an
    /// unknown or malformed specifier.
    pub fn new(pattern: &str, timezone: Tz) -> Result<Self> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LenientError::InvalidPattern(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
            timezone,
            policy: LocalTimePolicy::default(),
        })
    }

    /// Same as [`PatternFormatter::new`], with the timezone given by name.
    ///
    /// # Errors
    /// Returns `LenientError::InvalidTimezone` for unknown IANA names.
    pub fn with_timezone_name(pattern: &str, timezone: &str) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| LenientError::InvalidTimezone(timezone.to_string()))?;
        Self::new(pattern, tz)
    }

    pub fn policy(mut self, policy: LocalTimePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    fn resolve_local(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        let local = match self.timezone.from_local_datetime(naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(first, second) => match self.policy {
                LocalTimePolicy::Earliest => first,
                LocalTimePolicy::Latest => second,
                LocalTimePolicy::Reject => return None,
            },
            LocalResult::None => return None,
        };
        Some(local.with_timezone(&Utc))
    }
}

impl DateFormatter for PatternFormatter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_str(text, &self.pattern) {
            return Some(dt.with_timezone(&Utc));
        }
        let naive = match NaiveDateTime::parse_from_str(text, &self.pattern) {
            Ok(naive) => naive,
            Err(_) => NaiveDate::parse_from_str(text, &self.pattern)
                .ok()?
                .and_hms_opt(0, 0, 0)?,
        };
        self.resolve_local(&naive)
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        let local = date.with_timezone(&self.timezone);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.pattern)).is_err() {
            tracing::warn!(pattern = %self.pattern, "date pattern failed to format");
            out.clear();
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Unix timestamps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
}

/// Integer timestamps since the Unix epoch, stored as decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnixTimestampFormatter {
    pub unit: TimestampUnit,
}

impl UnixTimestampFormatter {
    pub fn new(unit: TimestampUnit) -> Self {
        Self { unit }
    }
}

impl DateFormatter for UnixTimestampFormatter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let n: i64 = text.parse().ok()?;
        match self.unit {
            TimestampUnit::Seconds => DateTime::from_timestamp(n, 0),
            TimestampUnit::Milliseconds => DateTime::from_timestamp_millis(n),
        }
    }

    fn format(&self, date: &DateTime<Utc>) -> String {
        match self.unit {
            TimestampUnit::Seconds => date.timestamp().to_string(),
            TimestampUnit::Milliseconds => date.timestamp_millis().to_string(),
        }
    }
}
