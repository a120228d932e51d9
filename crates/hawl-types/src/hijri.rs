//! Hijri date value and month-name tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transliterated Hijri month names. Index 0 is Muharram.
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadhan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Arabic-script Hijri month names. Index 0 is Muharram.
pub const HIJRI_MONTH_NAMES_ARABIC: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Writing system used when rendering a Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// ASCII digits and transliterated month names.
    #[default]
    Latin,
    /// Arabic-Indic digits and Arabic month names.
    Arabic,
}

impl Script {
    /// Month-name table for this script.
    pub fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Script::Latin => &HIJRI_MONTH_NAMES,
            Script::Arabic => &HIJRI_MONTH_NAMES_ARABIC,
        }
    }

    /// Rewrites ASCII digits in `s` into this script's digits.
    pub fn localize_digits(self, s: &str) -> String {
        match self {
            Script::Latin => s.to_owned(),
            Script::Arabic => s
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

/// Returns the transliterated name of a 1-based Hijri month.
pub fn hijri_month_name(month: u32) -> &'static str {
    match month {
        1..=12 => HIJRI_MONTH_NAMES[(month - 1) as usize],
        _ => "Unknown",
    }
}

/// A date in the Hijri calendar.
///
/// `month` is always 1-based (Muharram = 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `iYYYY/iMM/iDD` rendering with ASCII digits.
    pub formatted: String,
    /// Same structure with Arabic-Indic digits.
    pub formatted_arabic: String,
}

impl HijriDate {
    /// Builds a date and its canonical renderings.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let formatted = format!("{:04}/{:02}/{:02}", year, month, day);
        let formatted_arabic = Script::Arabic.localize_digits(&formatted);
        Self { year, month, day, formatted, formatted_arabic }
    }

    pub fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }

    pub fn month_name_arabic(&self) -> &'static str {
        match self.month {
            1..=12 => HIJRI_MONTH_NAMES_ARABIC[(self.month - 1) as usize],
            _ => "",
        }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_padding() {
        let h = HijriDate::new(1445, 6, 9);
        assert_eq!(h.formatted, "1445/06/09");
        assert_eq!(h.formatted_arabic, "١٤٤٥/٠٦/٠٩");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(hijri_month_name(1), "Muharram");
        assert_eq!(hijri_month_name(12), "Dhu al-Hijjah");
        assert_eq!(hijri_month_name(0), "Unknown");
        assert_eq!(HijriDate::new(1445, 9, 1).month_name_arabic(), "رمضان");
    }

    #[test]
    fn test_display() {
        assert_eq!(HijriDate::new(1445, 9, 1).to_string(), "1 Ramadhan 1445 AH");
    }
}
