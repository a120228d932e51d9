//! Hawl lifecycle: the fixed 354-day window, progress and status.
//!
//! Every function takes the query instant `now` explicitly. Nothing here reads
//! the wall clock or touches the calendar provider.

use chrono::{DateTime, TimeDelta, Utc};
use hawl_types::{HawlError, HawlState, HawlStatus, DUE_SOON_THRESHOLD_DAYS, HAWL_DAYS};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::context::HawlContext;
use crate::dates::add_days;

/// One Hawl window: `[start, start + 354 days)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HawlPeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl HawlPeriod {
    /// The period beginning at `start`.
    ///
    /// # Errors
    /// Returns `DateOutOfRange` if the end is not representable.
    pub fn starting(start: DateTime<Utc>) -> Result<Self, HawlError> {
        let end = add_days(start, HAWL_DAYS)?;
        Ok(Self { start, end })
    }

    /// The cycle of a Hawl first started at `start` that contains `now`.
    /// Before `start` this is the first cycle.
    pub fn current(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, HawlError> {
        let elapsed = (now - start).num_days();
        let cycles = if elapsed <= 0 { 0 } else { elapsed / HAWL_DAYS };
        Self::starting(add_days(start, cycles * HAWL_DAYS)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The period that begins when this one ends.
    pub fn next(&self) -> Result<Self, HawlError> {
        Self::starting(self.end)
    }

    /// Whether `now` has reached the end. The end instant itself counts.
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        now >= self.end
    }

    /// Days until the end, rounded up; 0 once complete.
    ///
    /// Any remainder, down to a nanosecond, counts as a whole day.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let remaining = self.end - now;
        if remaining <= TimeDelta::zero() {
            return 0;
        }
        let whole = remaining.num_days();
        if remaining > TimeDelta::days(whole) { whole + 1 } else { whole }
    }

    /// Whole elapsed days over 354, as a percentage clamped to [0, 100].
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = (now - self.start).num_days();
        (elapsed as f64 / HAWL_DAYS as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Status with the default 30-day due-soon threshold.
    pub fn status(&self, now: DateTime<Utc>) -> HawlStatus {
        self.status_with(now, DUE_SOON_THRESHOLD_DAYS)
    }

    /// Status with a custom due-soon threshold.
    ///
    /// Completion is checked before the threshold, so the end instant is
    /// always `Due`.
    pub fn status_with(&self, now: DateTime<Utc>, due_soon_days: i64) -> HawlStatus {
        let is_completed = self.is_completed(now);
        let days_remaining = self.days_remaining(now);

        let status = if is_completed {
            HawlState::Due
        } else if days_remaining <= due_soon_days {
            HawlState::DueSoon
        } else {
            HawlState::Active
        };
        trace!(start = %self.start, %now, %status, days_remaining, "derived hawl status");

        HawlStatus {
            status,
            progress: self.progress(now),
            days_remaining,
            is_completed,
            start_date: self.start,
            end_date: self.end,
        }
    }
}

/// Consecutive Hawl periods for an asset held across several lunar years.
#[derive(Debug, Clone)]
pub struct HawlCycles {
    next_start: Option<DateTime<Utc>>,
}

impl Iterator for HawlCycles {
    type Item = HawlPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        let period = HawlPeriod::starting(self.next_start.take()?).ok()?;
        self.next_start = Some(period.end);
        Some(period)
    }
}

/// Returns the Hawl periods starting at `start`, each beginning where the
/// previous one ends. Stops when dates leave the representable range.
pub fn hawl_cycles(start: DateTime<Utc>) -> HawlCycles {
    HawlCycles { next_start: Some(start) }
}

/// `start + 354 days`.
pub fn hawl_end_date(start: DateTime<Utc>) -> Result<DateTime<Utc>, HawlError> {
    Ok(HawlPeriod::starting(start)?.end)
}

pub fn days_remaining_in_hawl(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<i64, HawlError> {
    Ok(HawlPeriod::starting(start)?.days_remaining(now))
}

pub fn hawl_progress(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<f64, HawlError> {
    Ok(HawlPeriod::starting(start)?.progress(now))
}

pub fn is_hawl_completed(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<bool, HawlError> {
    Ok(HawlPeriod::starting(start)?.is_completed(now))
}

pub fn hawl_status(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<HawlStatus, HawlError> {
    Ok(HawlPeriod::starting(start)?.status(now))
}

pub fn hawl_status_with(
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    context: &HawlContext,
) -> Result<HawlStatus, HawlError> {
    Ok(HawlPeriod::starting(start)?.status_with(now, context.due_soon_days))
}
