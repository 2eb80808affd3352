//! # Temporal Types — UTC Timestamps
//!
//! Defines `Timestamp`, the date/time value produced when a frontmatter
//! field declared as a date/time is validated.
//!
//! ## Normalization
//!
//! Every accepted input is converted to UTC at construction. Offsets are
//! applied, not discarded, so `2026-01-15T17:00:00+05:00` and
//! `2026-01-15T12:00:00Z` are the same `Timestamp`. Sub-second precision is
//! kept as given.
//!
//! The rendered form (`Display`, `Serialize`) is RFC 3339 with a `Z` suffix
//! and parses back to the same instant, which is what makes re-validating a
//! coerced value a no-op.
//!
//! ## Recognized Text Formats
//!
//! | format                              | interpretation      |
//! |-------------------------------------|---------------------|
//! | RFC 3339 (`Z` or numeric offset)    | converted to UTC    |
//! | `YYYY-MM-DD[T ]HH:MM:SS[.fff][ ]±HH[:MM]` | converted to UTC |
//! | `YYYY-MM-DDTHH:MM:SS[.fff]`         | UTC                 |
//! | `YYYY-MM-DD HH:MM:SS[.fff]`         | UTC                 |
//! | `YYYY-MM-DD`                        | midnight UTC        |

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Offset-bearing layouts tried after RFC 3339: a space before the offset
/// and hour-only offsets, as YAML timestamps allow.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f %#z",
    "%Y-%m-%d %H:%M:%S%.f %#z",
];

/// Offset-free date-time layouts.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Date-only layout.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A UTC date/time.
///
/// # Construction
///
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`.
/// - [`Timestamp::parse()`] — strict RFC 3339, any offset.
/// - [`Timestamp::parse_lenient()`] — any recognized format (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    pub fn parse(s: &str) -> Result<Self, FolioError> {
        DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| FolioError::InvalidTimestamp {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse any recognized date/time format.
    ///
    /// Tries RFC 3339 first, then the other offset layouts, then the
    /// offset-free layouts, then a bare date. Offset-free inputs are read as
    /// UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, FolioError> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
                return Ok(Self(dt.with_timezone(&Utc)));
            }
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }

        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
            FolioError::InvalidTimestamp {
                input: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| FolioError::InvalidTimestamp {
            input: s.to_string(),
            reason: "date has no midnight".to_string(),
        })?;
        Ok(Self(Utc.from_utc_datetime(&midnight)))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as RFC 3339 with a `Z` suffix. Sub-seconds appear only when
    /// present.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
