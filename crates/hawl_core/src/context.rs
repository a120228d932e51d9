use hawl_calendar::{UmmAlQura, MAX_ADJUSTMENT};
use hawl_types::{HawlError, DUE_SOON_THRESHOLD_DAYS, HAWL_DAYS};
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HawlContext {
    /// Hijri day offset for local moon sighting. Clamped to [-30, 30].
    pub adjustment: i64,
    /// Remaining days at or below which an open Hawl is due soon.
    #[serde(alias = "dueSoonDays")]
    pub due_soon_days: i64,
}

impl Default for HawlContext {
    fn default() -> Self {
        Self {
            adjustment: 0,
            due_soon_days: DUE_SOON_THRESHOLD_DAYS,
        }
    }
}

impl HawlContext {
    pub fn new() -> Self { Self::default() }

    pub fn adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = adjustment.clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT);
        self
    }

    pub fn due_soon_days(mut self, days: i64) -> Self {
        self.due_soon_days = days.clamp(0, HAWL_DAYS);
        self
    }

    /// Calendar provider carrying this context's adjustment.
    pub fn provider(&self) -> UmmAlQura {
        UmmAlQura::with_adjustment(self.adjustment)
    }
}

/// Builder with validation for `HawlContext`.
#[derive(Debug, Default)]
pub struct HawlContextBuilder {
    adjustment: Option<i64>,
    due_soon_days: Option<i64>,
    strict_adjustment: bool,
}

impl HawlContextBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn adjustment(mut self, adjustment: i64) -> Self { self.adjustment = Some(adjustment); self }
    pub fn due_soon_days(mut self, days: i64) -> Self { self.due_soon_days = Some(days); self }

    /// Enables strict adjustment bounds [-2, 2].
    pub fn strict_adjustment(mut self, strict: bool) -> Self { self.strict_adjustment = strict; self }

    /// Builds and validates.
    pub fn build(self) -> Result<HawlContext, HawlError> {
        let adjustment = self.adjustment.unwrap_or(0);
        let bound = if self.strict_adjustment { 2 } else { MAX_ADJUSTMENT };
        if !(-bound..=bound).contains(&adjustment) {
            return Err(HawlError::invalid_config(format!(
                "Adjustment {} outside bounds [-{}, {}]", adjustment, bound, bound
            )));
        }

        let due_soon_days = self.due_soon_days.unwrap_or(DUE_SOON_THRESHOLD_DAYS);
        if !(0..=HAWL_DAYS).contains(&due_soon_days) {
            return Err(HawlError::invalid_config(format!(
                "Due-soon threshold {} outside [0, {}]", due_soon_days, HAWL_DAYS
            )));
        }

        Ok(HawlContext { adjustment, due_soon_days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = HawlContext::default();
        assert_eq!(ctx.adjustment, 0);
        assert_eq!(ctx.due_soon_days, 30);
    }

    #[test]
    fn test_setters_clamp() {
        let ctx = HawlContext::new().adjustment(45).due_soon_days(-3);
        assert_eq!(ctx.adjustment, 30);
        assert_eq!(ctx.due_soon_days, 0);
        assert_eq!(ctx.provider().adjustment(), 30);
    }

    #[test]
    fn test_accepts_camel_case_keys() {
        let ctx: HawlContext = serde_json::from_str(r#"{ "adjustment": 1, "dueSoonDays": 10 }"#).unwrap();
        assert_eq!(ctx, HawlContext { adjustment: 1, due_soon_days: 10 });

        let snake: HawlContext = serde_json::from_str(r#"{ "due_soon_days": 10 }"#).unwrap();
        assert_eq!(snake.due_soon_days, 10);
    }

    #[test]
    fn test_builder_validates() {
        assert!(HawlContextBuilder::new().adjustment(3).strict_adjustment(true).build().is_err());
        assert!(HawlContextBuilder::new().adjustment(3).build().is_ok());
        assert!(matches!(
            HawlContextBuilder::new().due_soon_days(400).build(),
            Err(HawlError::InvalidConfiguration { .. })
        ));

        let ctx = HawlContextBuilder::new().adjustment(-1).due_soon_days(14).build().unwrap();
        assert_eq!(ctx, HawlContext { adjustment: -1, due_soon_days: 14 });
    }
}
