//! Hawl status value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a Hawl in days. A fixed approximation of one lunar year.
pub const HAWL_DAYS: i64 = 354;

/// Remaining-day threshold at or below which an open Hawl is due soon.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 30;

/// Where a Hawl stands at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HawlState {
    /// The holding period is running.
    Active,
    /// The period is still open but ends within the due-soon threshold.
    DueSoon,
    /// The period is complete; Zakat is due.
    Due,
}

impl HawlState {
    pub fn is_due(&self) -> bool {
        matches!(self, HawlState::Due)
    }

    pub fn is_due_soon(&self) -> bool {
        matches!(self, HawlState::DueSoon)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HawlState::Active)
    }

    /// Wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            HawlState::Active => "active",
            HawlState::DueSoon => "due_soon",
            HawlState::Due => "due",
        }
    }
}

impl fmt::Display for HawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a Hawl at one instant. Never cached; recompute per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HawlStatus {
    pub status: HawlState,
    /// Percentage elapsed, within `[0, 100]`.
    pub progress: f64,
    /// Whole days left, rounded up. Zero once complete.
    pub days_remaining: i64,
    pub is_completed: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
