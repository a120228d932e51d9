use chrono::{Datelike, Duration, NaiveDate};
use hawl_types::{
    max_supported_date, min_supported_date, HawlError, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR,
};
use hijri_date::HijriDate as TabularDate;
use tracing::debug;

use crate::provider::{HijriComponents, HijriProvider};

/// Largest moon-sighting adjustment accepted, in days.
pub const MAX_ADJUSTMENT: i64 = 30;

/// Umm al-Qura calendar backed by the `hijri_date` tables.
///
/// Supports Hijri years 1357 through 1499 (1938-03-02 to 2076-11-26), the
/// span the tables convert in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UmmAlQura {
    adjustment: i64,
}

impl UmmAlQura {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider shifted by a moon-sighting offset (positive = Hijri ahead).
    /// Clamped to [-30, 30].
    pub fn with_adjustment(adjustment: i64) -> Self {
        Self {
            adjustment: adjustment.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT),
        }
    }

    pub fn adjustment(&self) -> i64 {
        self.adjustment
    }
}

impl HijriProvider for UmmAlQura {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriComponents, HawlError> {
        let adjusted = date
            .checked_add_signed(Duration::days(self.adjustment))
            .ok_or_else(|| HawlError::unrepresentable(date))?;

        if adjusted < min_supported_date() || adjusted > max_supported_date() {
            debug!(%date, adjustment = self.adjustment, "date outside Umm al-Qura tables");
            return Err(HawlError::date_out_of_range(date));
        }

        let hijri = TabularDate::from_gr(
            adjusted.year() as usize,
            adjusted.month() as usize,
            adjusted.day() as usize,
        )
        .map_err(|e| {
            debug!(%date, error = %e, "Gregorian to Hijri conversion failed");
            HawlError::date_out_of_range(date)
        })?;

        let year = hijri.year() as i32;
        if !(HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&year) {
            debug!(%date, year, "Hijri year outside Umm al-Qura tables");
            return Err(HawlError::date_out_of_range(date));
        }

        Ok(HijriComponents::new(
            year,
            (hijri.month() as u32).saturating_sub(1),
            hijri.day() as u32,
        ))
    }

    fn from_hijri(&self, hijri: HijriComponents) -> Result<NaiveDate, HawlError> {
        let invalid = || HawlError::InvalidHijriDate {
            year: hijri.year,
            month: hijri.month(),
            day: hijri.day,
        };

        if !(HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&hijri.year)
            || hijri.month0 > 11
            || !(1..=30).contains(&hijri.day)
        {
            return Err(invalid());
        }

        let tabular = TabularDate::from_hijri(
            hijri.year as usize,
            hijri.month() as usize,
            hijri.day as usize,
        )
        .map_err(|e| {
            debug!(year = hijri.year, month = hijri.month(), day = hijri.day, error = %e,
                "Hijri to Gregorian conversion failed");
            invalid()
        })?;

        let gregorian = NaiveDate::from_ymd_opt(
            tabular.year_gr() as i32,
            tabular.month_gr() as u32,
            tabular.day_gr() as u32,
        )
        .ok_or_else(invalid)?;
        let date = gregorian
            .checked_sub_signed(Duration::days(self.adjustment))
            .ok_or_else(|| HawlError::unrepresentable(gregorian))?;

        // A day 30 in a 29-day month composes into the next month; reject it.
        if self.to_hijri(date).ok() != Some(hijri) {
            debug!(year = hijri.year, month = hijri.month(), day = hijri.day, "Hijri day does not exist");
            return Err(invalid());
        }

        Ok(date)
    }

    fn days_in_last_month(&self, year: i32) -> Result<u32, HawlError> {
        self.from_hijri(HijriComponents::new(year, 11, 1))?;
        match self.from_hijri(HijriComponents::new(year, 11, 30)) {
            Ok(_) => Ok(30),
            Err(HawlError::InvalidHijriDate { .. }) => Ok(29),
            Err(e) => Err(e),
        }
    }
}
