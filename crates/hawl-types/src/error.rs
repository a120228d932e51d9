//! Error type shared by every hawl crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First Hijri year the default provider converts in both directions.
pub const HIJRI_MIN_YEAR: i32 = 1357;
/// Last Hijri year the default provider converts in both directions.
pub const HIJRI_MAX_YEAR: i32 = 1499;

/// First supported Gregorian day, 1 Muharram 1357.
pub fn min_supported_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1938, 3, 2).unwrap_or(NaiveDate::MIN)
}

/// Last supported Gregorian day, the end of Dhu al-Hijjah 1499.
pub fn max_supported_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2076, 11, 26).unwrap_or(NaiveDate::MAX)
}

/// Errors from hawl operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HawlError {
    /// Input could not be parsed into a date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Date outside the supported range.
    #[error("Date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Hijri components the calendar cannot compose.
    #[error("Invalid Hijri date {year}/{month}/{day}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    /// Format pattern that cannot be rendered.
    #[error("Invalid format pattern '{pattern}'")]
    InvalidPattern { pattern: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl HawlError {
    /// Creates a `DateOutOfRange` error with the default provider's bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: min_supported_date(),
            max: max_supported_date(),
        }
    }

    /// Creates a `DateOutOfRange` error for arithmetic leaving chrono's range.
    pub fn unrepresentable(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::MIN,
            max: NaiveDate::MAX,
        }
    }

    /// Creates an `InvalidDate` error.
    pub fn invalid_date(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an `InvalidPattern` error.
    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern { pattern: pattern.into() }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_bounds() {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        match HawlError::date_out_of_range(date) {
            HawlError::DateOutOfRange { min, max, .. } => {
                assert_eq!(min, NaiveDate::from_ymd_opt(1938, 3, 2).unwrap());
                assert_eq!(max, NaiveDate::from_ymd_opt(2076, 11, 26).unwrap());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = HawlError::invalid_date("2024-13-01", "month out of range");
        assert_eq!(err.to_string(), "Invalid date '2024-13-01': month out of range");

        let err = HawlError::InvalidHijriDate { year: 1445, month: 13, day: 1 };
        assert_eq!(err.to_string(), "Invalid Hijri date 1445/13/1");
    }

    #[test]
    fn test_serde_roundtrip() {
        let err = HawlError::invalid_config("due_soon_days must be within [0, 354]");
        let json = serde_json::to_string(&err).unwrap();
        let back: HawlError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
