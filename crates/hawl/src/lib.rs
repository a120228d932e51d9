//! # Hawl
//!
//! Hijri calendar conversion and Hawl (Zakat holding period) tracking for
//! personal-finance applications.
//!
//! This crate is a facade that re-exports functionality from the `hawl` ecosystem.
//!
//! ## Modules
//!
//! - `convert`: Gregorian ⇄ Hijri conversion and date rendering
//! - `hawl`: the 354-day Hawl window, progress and status
//! - `dates`: parsing and day arithmetic
//! - `context`: engine configuration
//!
//! ## Usage
//!
//! ```rust
//! use hawl::prelude::*;
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let provider = UmmAlQura::new();
//! let hijri = to_hijri(&provider, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let status = hawl_status(start, SystemClock.now()); // Result<HawlStatus, HawlError>
//! ```

pub use hawl_core::*;
