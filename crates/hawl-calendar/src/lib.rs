//! Hijri calendar provider for Hawl.
//!
//! Wraps the Umm al-Qura tables behind the [`HijriProvider`] trait, renders
//! dates against strftime patterns and supplies the [`Clock`] capability.

mod clock;
pub mod format;
mod provider;
mod umm_al_qura;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{DEFAULT_DATE_PATTERN, DEFAULT_HIJRI_PATTERN};
pub use provider::{HijriComponents, HijriProvider};
pub use umm_al_qura::{UmmAlQura, MAX_ADJUSTMENT};

pub use hawl_types::HawlError;
