//! The calendar provider seam.

use chrono::{NaiveDate, NaiveDateTime};
use hawl_types::{HawlError, Script};
use std::fmt;

use crate::format;

/// Hijri year, month and day as exchanged with a provider.
///
/// The month is zero-based (`month0`, Muharram = 0), matching
/// `chrono::Datelike::month0`. Callers above the provider only ever see
/// 1-based months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriComponents {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl HijriComponents {
    pub const fn new(year: i32, month0: u32, day: u32) -> Self {
        Self { year, month0, day }
    }

    /// One-based month.
    pub const fn month(&self) -> u32 {
        self.month0 + 1
    }
}

/// Supplies Hijri conversion and date rendering.
///
/// Implementations must be pure: the same input always yields the same output.
pub trait HijriProvider: fmt::Debug + Send + Sync {
    /// Hijri components of a Gregorian day.
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriComponents, HawlError>;

    /// Gregorian day of the given Hijri components.
    fn from_hijri(&self, hijri: HijriComponents) -> Result<NaiveDate, HawlError>;

    /// Number of days (29 or 30) in the twelfth month of a Hijri year.
    fn days_in_last_month(&self, year: i32) -> Result<u32, HawlError>;

    /// Whether the provider can convert `date`.
    fn is_valid(&self, date: NaiveDate) -> bool {
        self.to_hijri(date).is_ok()
    }

    /// Renders a Gregorian instant against a strftime pattern.
    fn format_gregorian(&self, instant: NaiveDateTime, pattern: &str) -> Result<String, HawlError> {
        format::render_gregorian(instant, pattern)
    }

    /// Renders the Hijri date of an instant against a strftime pattern.
    fn format_hijri(
        &self,
        instant: NaiveDateTime,
        pattern: &str,
        script: Script,
    ) -> Result<String, HawlError> {
        let hijri = self.to_hijri(instant.date())?;
        format::render_hijri(instant, hijri, pattern, script)
    }
}
