//! Core types for Hawl - Hijri calendar and Zakat holding-period engine.
//!
//! This crate contains pure type definitions with no business logic.

mod error;
mod hijri;
mod status;

pub use error::{
    max_supported_date, min_supported_date, HawlError, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR,
};
pub use hijri::{hijri_month_name, HijriDate, Script, HIJRI_MONTH_NAMES, HIJRI_MONTH_NAMES_ARABIC};
pub use status::{HawlState, HawlStatus, DUE_SOON_THRESHOLD_DAYS, HAWL_DAYS};
