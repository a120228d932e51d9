//! # Hawl Core
//!
//! Hijri calendar conversion and Hawl (Zakat holding period) tracking.
//!
//! A Hawl is fixed at exactly 354 days from its start. Status, progress and
//! remaining days are pure functions of `(start, now)`; callers read the
//! clock once and pass `now` down.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use hawl_core::prelude::*;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let status = hawl_status(start, start + Duration::days(324)).unwrap();
//! assert_eq!(status.status, HawlState::DueSoon);
//! assert_eq!(status.days_remaining, 30);
//! ```

pub mod context;
pub mod convert;
pub mod dates;
pub mod extension;
pub mod hawl;

pub use hawl_calendar::{
    Clock, FixedClock, HijriComponents, HijriProvider, SystemClock, UmmAlQura,
    DEFAULT_DATE_PATTERN, DEFAULT_HIJRI_PATTERN,
};
pub use hawl_types::{
    hijri_month_name, max_supported_date, min_supported_date, HawlError, HawlState, HawlStatus,
    HijriDate, Script, DUE_SOON_THRESHOLD_DAYS, HAWL_DAYS, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR,
};

pub use context::{HawlContext, HawlContextBuilder};
pub use convert::{
    current_hijri_date, current_islamic_year, format_date, format_hijri_date,
    format_hijri_date_arabic, hijri_month_names, hijri_month_names_arabic, is_islamic_leap_year,
    to_gregorian, to_hijri,
};
pub use dates::{add_days, days_between, is_valid_date, parse_date};
pub use extension::HawlDateExt;
pub use hawl::{
    days_remaining_in_hawl, hawl_cycles, hawl_end_date, hawl_progress, hawl_status,
    hawl_status_with, is_hawl_completed, HawlCycles, HawlPeriod,
};

pub mod prelude {
    pub use crate::{
        days_between, days_remaining_in_hawl, hawl_end_date, hawl_progress, hawl_status,
        is_hawl_completed, to_gregorian, to_hijri,
    };
    pub use crate::{HawlContext, HawlDateExt, HawlError, HawlPeriod, HawlState, HawlStatus, HijriDate};
    pub use crate::{Clock, HijriProvider, SystemClock, UmmAlQura};
}
