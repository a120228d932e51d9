//! Gregorian date helpers.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use hawl_types::HawlError;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses an RFC 3339 instant, a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC)
/// or a plain `YYYY-MM-DD` (midnight UTC).
///
/// # Errors
/// Returns `InvalidDate` if none of the forms match.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, HawlError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| HawlError::invalid_date(input, e))
}

/// Returns true if `input` parses as a date.
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

/// Signed whole days from `a` to `b`, truncated toward zero.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b - a).num_days()
}

/// Adds whole calendar days; negative `days` subtracts.
///
/// # Errors
/// Returns `DateOutOfRange` if the result is not representable.
pub fn add_days(date: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, HawlError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| HawlError::unrepresentable(date.date_naive()))
}
