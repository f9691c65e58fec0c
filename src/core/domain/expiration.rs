//! Expiration parsing.
//!
//! Turns the textual forms users type on the command line into unix seconds.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::core::types::Timestamp;
use crate::error::{Result, ValidationError};

/// Naive date-time layouts, tried in order. Interpreted in local time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an expiration.
///
/// Accepted forms:
/// - all digits: unix seconds (`1735689600`)
/// - RFC 3339 (`2025-01-01T00:00:00Z`, `2025-01-01T02:00:00+02:00`)
/// - local date-time (`2025-01-01T09:30`, `2025-01-01 09:30:00`)
/// - local date, at midnight (`2025-01-01`)
///
/// # Errors
///
/// Returns `ValidationError::InvalidExpiration` for anything else.
pub fn parse(value: &str) -> Result<Timestamp> {
    let value = value.trim();

    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse::<Timestamp>()
            .map_err(|_| invalid(value).into());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return local(&naive, value);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0).ok_or_else(|| invalid(value))?;
        return local(&naive, value);
    }

    Err(invalid(value).into())
}

fn local(naive: &NaiveDateTime, original: &str) -> Result<Timestamp> {
    // DST gaps have no local mapping; folds take the earlier instant
    Local
        .from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| invalid(original).into())
}

fn invalid(value: &str) -> ValidationError {
    ValidationError::InvalidExpiration(value.to_string())
}
