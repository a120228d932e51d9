//! Extension trait for `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use hawl_calendar::UmmAlQura;
use hawl_types::{HawlError, HawlStatus, HijriDate};

use crate::convert::to_hijri;
use crate::dates::days_between;
use crate::hawl::HawlPeriod;

/// Treats an instant as the start of a Hawl.
pub trait HawlDateExt {
    /// End of the Hawl starting at this instant.
    fn hawl_end(&self) -> Result<DateTime<Utc>, HawlError>;

    /// Status of the Hawl starting at this instant, as seen at `now`.
    fn hawl_status_at(&self, now: DateTime<Utc>) -> Result<HawlStatus, HawlError>;

    fn hawl_progress_at(&self, now: DateTime<Utc>) -> Result<f64, HawlError>;

    fn is_hawl_completed_at(&self, now: DateTime<Utc>) -> Result<bool, HawlError>;

    /// Signed whole days from this instant to `other`.
    fn days_until(&self, other: DateTime<Utc>) -> i64;

    /// Hijri date of this instant's UTC day, using the Umm al-Qura tables.
    fn to_hijri_date(&self) -> Result<HijriDate, HawlError>;
}

impl HawlDateExt for DateTime<Utc> {
    fn hawl_end(&self) -> Result<DateTime<Utc>, HawlError> {
        Ok(HawlPeriod::starting(*self)?.end())
    }

    fn hawl_status_at(&self, now: DateTime<Utc>) -> Result<HawlStatus, HawlError> {
        Ok(HawlPeriod::starting(*self)?.status(now))
    }

    fn hawl_progress_at(&self, now: DateTime<Utc>) -> Result<f64, HawlError> {
        Ok(HawlPeriod::starting(*self)?.progress(now))
    }

    fn is_hawl_completed_at(&self, now: DateTime<Utc>) -> Result<bool, HawlError> {
        Ok(HawlPeriod::starting(*self)?.is_completed(now))
    }

    fn days_until(&self, other: DateTime<Utc>) -> i64 {
        days_between(*self, other)
    }

    fn to_hijri_date(&self) -> Result<HijriDate, HawlError> {
        to_hijri(&UmmAlQura::new(), self.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use hawl_types::HawlState;

    #[test]
    fn test_extension_trait() {
        let start = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        assert_eq!(start.hawl_end().unwrap(), start + Duration::days(354));
        assert_eq!(start.days_until(start.hawl_end().unwrap()), 354);

        let status = start.hawl_status_at(start + Duration::days(330)).unwrap();
        assert_eq!(status.status, HawlState::DueSoon);
        assert!(start.is_hawl_completed_at(start + Duration::days(354)).unwrap());
        assert_eq!(start.hawl_progress_at(start).unwrap(), 0.0);
    }

    #[test]
    fn test_to_hijri_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        let hijri = date.to_hijri_date().unwrap();
        assert_eq!((hijri.year, hijri.month, hijri.day), (1445, 9, 1));
    }

    #[test]
    fn test_to_hijri_date_out_of_range() {
        let date = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        assert!(date.to_hijri_date().is_err());
    }
}
