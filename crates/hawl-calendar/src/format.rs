//! Pattern rendering for Gregorian and Hijri dates.
//!
//! Patterns use chrono's strftime syntax. For Hijri output the year, month,
//! day and month-name items are taken from the Hijri components; every other
//! item (weekday, time of day, literals) is rendered by chrono.

use chrono::NaiveDateTime;
use chrono::format::{Fixed, Item, Numeric, Pad, StrftimeItems};
use hawl_types::{HawlError, Script};
use std::fmt::{self, Write};

use crate::provider::HijriComponents;

/// Default Gregorian pattern (`YYYY-MM-DD`).
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";
/// Default Hijri pattern (`iYYYY/iMM/iDD`).
pub const DEFAULT_HIJRI_PATTERN: &str = "%Y/%m/%d";

fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>, HawlError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(HawlError::invalid_pattern(pattern));
    }
    Ok(items)
}

/// Renders a Gregorian instant against a strftime pattern.
pub fn render_gregorian(instant: NaiveDateTime, pattern: &str) -> Result<String, HawlError> {
    let items = parse_pattern(pattern)?;
    let mut out = String::new();
    write!(out, "{}", instant.format_with_items(items.iter()))
        .map_err(|_| HawlError::invalid_pattern(pattern))?;
    Ok(out)
}

/// Renders the Hijri components of `instant` against a strftime pattern.
pub fn render_hijri(
    instant: NaiveDateTime,
    hijri: HijriComponents,
    pattern: &str,
    script: Script,
) -> Result<String, HawlError> {
    let items = parse_pattern(pattern)?;
    let month_name = script.month_names()[hijri.month0.min(11) as usize];
    let mut out = String::new();

    for item in &items {
        let written = match item {
            Item::Numeric(Numeric::Year, pad) => push_number(&mut out, i64::from(hijri.year), 4, *pad),
            Item::Numeric(Numeric::YearMod100, pad) => {
                push_number(&mut out, i64::from(hijri.year.rem_euclid(100)), 2, *pad)
            }
            Item::Numeric(Numeric::Month, pad) => push_number(&mut out, i64::from(hijri.month()), 2, *pad),
            Item::Numeric(Numeric::Day, pad) => push_number(&mut out, i64::from(hijri.day), 2, *pad),
            Item::Fixed(Fixed::LongMonthName | Fixed::ShortMonthName) => out.write_str(month_name),
            other => write!(out, "{}", instant.format_with_items(std::iter::once(other))),
        };
        written.map_err(|_| HawlError::invalid_pattern(pattern))?;
    }

    Ok(script.localize_digits(&out))
}

fn push_number(out: &mut String, value: i64, width: usize, pad: Pad) -> fmt::Result {
    match pad {
        Pad::Zero => write!(out, "{:0width$}", value, width = width),
        Pad::Space => write!(out, "{:>width$}", value, width = width),
        _ => write!(out, "{}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(14, 30, 0).unwrap()
    }

    #[test]
    fn test_gregorian_passthrough() {
        let t = instant(2024, 3, 11);
        assert_eq!(render_gregorian(t, DEFAULT_DATE_PATTERN).unwrap(), "2024-03-11");
        assert_eq!(render_gregorian(t, "%d %B %Y, %H:%M").unwrap(), "11 March 2024, 14:30");
    }

    #[test]
    fn test_invalid_pattern() {
        let t = instant(2024, 3, 11);
        assert!(matches!(
            render_gregorian(t, "%Y-%m-%"),
            Err(HawlError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_hijri_items_and_fallback() {
        let t = instant(2024, 3, 11);
        let hijri = HijriComponents::new(1445, 8, 1);
        assert_eq!(render_hijri(t, hijri, DEFAULT_HIJRI_PATTERN, Script::Latin).unwrap(), "1445/09/01");
        assert_eq!(render_hijri(t, hijri, "%-d %B %Y", Script::Latin).unwrap(), "1 Ramadhan 1445");
        // Weekday and time come from the Gregorian instant.
        assert_eq!(render_hijri(t, hijri, "%A %H:%M", Script::Latin).unwrap(), "Monday 14:30");
    }

    #[test]
    fn test_hijri_arabic_script() {
        let t = instant(2024, 3, 11);
        let hijri = HijriComponents::new(1445, 8, 1);
        assert_eq!(render_hijri(t, hijri, DEFAULT_HIJRI_PATTERN, Script::Arabic).unwrap(), "١٤٤٥/٠٩/٠١");
        assert_eq!(render_hijri(t, hijri, "%B", Script::Arabic).unwrap(), "رمضان");
    }
}
