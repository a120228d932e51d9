//! Gregorian ⇄ Hijri conversion and date rendering over a [`HijriProvider`].

use chrono::{DateTime, NaiveDate, Utc};
use hawl_calendar::{Clock, HijriComponents, HijriProvider};
use hawl_types::{HawlError, HijriDate, Script, HIJRI_MONTH_NAMES, HIJRI_MONTH_NAMES_ARABIC};
use tracing::debug;

fn check_components(year: i32, month: u32, day: u32) -> Result<(), HawlError> {
    if (1..=12).contains(&month) && (1..=30).contains(&day) {
        Ok(())
    } else {
        Err(HawlError::InvalidHijriDate { year, month, day })
    }
}

/// Converts a Gregorian day to its Hijri date.
///
/// # Errors
/// Propagates the provider's failure, e.g. `DateOutOfRange`.
pub fn to_hijri<P: HijriProvider + ?Sized>(provider: &P, date: NaiveDate) -> Result<HijriDate, HawlError> {
    let parts = provider.to_hijri(date)?;
    let month = parts.month();
    if let Err(e) = check_components(parts.year, month, parts.day) {
        debug!(%date, ?parts, "provider returned out-of-range Hijri components");
        return Err(e);
    }
    Ok(HijriDate::new(parts.year, month, parts.day))
}

/// Converts a Hijri date (1-based month) to the Gregorian day.
///
/// # Errors
/// Returns `InvalidHijriDate` for a month outside 1..=12, a day outside
/// 1..=30, or a day the month does not have.
pub fn to_gregorian<P: HijriProvider + ?Sized>(
    provider: &P,
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDate, HawlError> {
    check_components(year, month, day)?;
    provider.from_hijri(HijriComponents::new(year, month - 1, day))
}

/// Today's Hijri date according to `clock`.
pub fn current_hijri_date<P, C>(provider: &P, clock: &C) -> Result<HijriDate, HawlError>
where
    P: HijriProvider + ?Sized,
    C: Clock + ?Sized,
{
    to_hijri(provider, clock.now().date_naive())
}

/// Current Hijri year according to `clock`.
pub fn current_islamic_year<P, C>(provider: &P, clock: &C) -> Result<i32, HawlError>
where
    P: HijriProvider + ?Sized,
    C: Clock + ?Sized,
{
    Ok(current_hijri_date(provider, clock)?.year)
}

/// True when Dhu al-Hijjah of `year` has 30 days.
///
/// This is the engine's working definition of a long year, taken from the
/// provider's month lengths rather than the arithmetic 11-in-30 cycle.
pub fn is_islamic_leap_year<P: HijriProvider + ?Sized>(provider: &P, year: i32) -> Result<bool, HawlError> {
    Ok(provider.days_in_last_month(year)? == 30)
}

/// Renders a Gregorian instant. The pattern is handed to the provider as-is.
pub fn format_date<P: HijriProvider + ?Sized>(
    provider: &P,
    date: DateTime<Utc>,
    pattern: &str,
) -> Result<String, HawlError> {
    provider.format_gregorian(date.naive_utc(), pattern)
}

/// Renders the Hijri date of an instant with ASCII digits.
pub fn format_hijri_date<P: HijriProvider + ?Sized>(
    provider: &P,
    date: DateTime<Utc>,
    pattern: &str,
) -> Result<String, HawlError> {
    provider.format_hijri(date.naive_utc(), pattern, Script::Latin)
}

/// Renders the Hijri date of an instant with Arabic digits and month names.
pub fn format_hijri_date_arabic<P: HijriProvider + ?Sized>(
    provider: &P,
    date: DateTime<Utc>,
    pattern: &str,
) -> Result<String, HawlError> {
    provider.format_hijri(date.naive_utc(), pattern, Script::Arabic)
}

pub fn hijri_month_names() -> &'static [&'static str; 12] {
    &HIJRI_MONTH_NAMES
}

pub fn hijri_month_names_arabic() -> &'static [&'static str; 12] {
    &HIJRI_MONTH_NAMES_ARABIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use hawl_calendar::FixedClock;

    /// Treats every Gregorian date as the same day number in a calendar of
    /// twelve 30-day months starting 2000-01-01 = 1421/1/1.
    #[derive(Debug)]
    struct FakeProvider {
        last_month_days: u32,
    }

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
    }

    impl HijriProvider for FakeProvider {
        fn to_hijri(&self, date: NaiveDate) -> Result<HijriComponents, HawlError> {
            let n = (date - epoch()).num_days();
            if n < 0 {
                return Err(HawlError::date_out_of_range(date));
            }
            Ok(HijriComponents::new(1421 + (n / 360) as i32, ((n % 360) / 30) as u32, (n % 30) as u32 + 1))
        }

        fn from_hijri(&self, h: HijriComponents) -> Result<NaiveDate, HawlError> {
            let n = i64::from(h.year - 1421) * 360 + i64::from(h.month0) * 30 + i64::from(h.day) - 1;
            Ok(epoch() + Duration::days(n))
        }

        fn days_in_last_month(&self, _year: i32) -> Result<u32, HawlError> {
            Ok(self.last_month_days)
        }
    }

    /// Reports a 0-based month past the end of the year.
    #[derive(Debug)]
    struct BrokenProvider;

    impl HijriProvider for BrokenProvider {
        fn to_hijri(&self, _date: NaiveDate) -> Result<HijriComponents, HawlError> {
            Ok(HijriComponents::new(1445, 12, 1))
        }

        fn from_hijri(&self, h: HijriComponents) -> Result<NaiveDate, HawlError> {
            Err(HawlError::InvalidHijriDate { year: h.year, month: h.month(), day: h.day })
        }

        fn days_in_last_month(&self, _year: i32) -> Result<u32, HawlError> {
            Ok(29)
        }
    }

    const FAKE: FakeProvider = FakeProvider { last_month_days: 30 };

    #[test]
    fn test_month_translated_to_one_based() {
        let h = to_hijri(&FAKE, epoch()).unwrap();
        assert_eq!((h.year, h.month, h.day), (1421, 1, 1));
        assert_eq!(h.formatted, "1421/01/01");

        let h = to_hijri(&FAKE, epoch() + Duration::days(359)).unwrap();
        assert_eq!((h.year, h.month, h.day), (1421, 12, 30));
    }

    #[test]
    fn test_to_gregorian_uses_zero_based_month() {
        let d = to_gregorian(&FAKE, 1421, 2, 1).unwrap();
        assert_eq!(d, epoch() + Duration::days(30));
    }

    #[test]
    fn test_to_gregorian_rejects_bad_month() {
        assert!(matches!(to_gregorian(&FAKE, 1445, 0, 1), Err(HawlError::InvalidHijriDate { .. })));
        assert!(matches!(to_gregorian(&FAKE, 1445, 13, 1), Err(HawlError::InvalidHijriDate { .. })));
        assert!(to_gregorian(&FAKE, 1445, 1, 31).is_err());
    }

    #[test]
    fn test_rejects_invalid_provider_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(to_hijri(&BrokenProvider, date), Err(HawlError::InvalidHijriDate { month: 13, .. })));
    }

    #[test]
    fn test_provider_error_propagates() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert!(matches!(to_hijri(&FAKE, date), Err(HawlError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_leap_year_follows_last_month() {
        assert!(is_islamic_leap_year(&FakeProvider { last_month_days: 30 }, 1445).unwrap());
        assert!(!is_islamic_leap_year(&FakeProvider { last_month_days: 29 }, 1445).unwrap());
    }

    #[test]
    fn test_current_date_reads_clock() {
        let now = Utc.with_ymd_and_hms(2000, 2, 5, 18, 0, 0).unwrap();
        let clock = FixedClock::new(now);
        let h = current_hijri_date(&FAKE, &clock).unwrap();
        assert_eq!((h.month, h.day), (2, 6));
        assert_eq!(current_islamic_year(&FAKE, &clock).unwrap(), 1421);
    }

    #[test]
    fn test_formatting_passthrough() {
        let t = Utc.with_ymd_and_hms(2000, 2, 5, 18, 0, 0).unwrap();
        assert_eq!(format_date(&FAKE, t, "%Y-%m-%d").unwrap(), "2000-02-05");
        assert_eq!(format_hijri_date(&FAKE, t, "%Y/%m/%d").unwrap(), "1421/02/06");
        assert_eq!(format_hijri_date(&FAKE, t, "%d %B").unwrap(), "06 Safar");
        assert_eq!(format_hijri_date_arabic(&FAKE, t, "%Y").unwrap(), "١٤٢١");
    }

    #[test]
    fn test_month_tables() {
        assert_eq!(hijri_month_names()[0], "Muharram");
        assert_eq!(hijri_month_names()[11], "Dhu al-Hijjah");
        assert_eq!(hijri_month_names_arabic().len(), 12);
    }
}
