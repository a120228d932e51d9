//! WASM bindings for Hawl - Hijri calendar and Zakat holding-period engine
//!
//! Dates cross the boundary as ISO-8601 strings. Time-dependent functions take
//! `now` from the caller; nothing here reads the clock.

use chrono::{DateTime, SecondsFormat, Utc};
use hawl_core::{
    FixedClock, HawlContext, HawlError, HawlStatus, HijriDate, UmmAlQura, DEFAULT_DATE_PATTERN,
    DEFAULT_HIJRI_PATTERN,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: HawlError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse(input: &str) -> Result<DateTime<Utc>, JsValue> {
    hawl_core::parse_date(input).map_err(js_error)
}

fn iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn days_to_js(days: i64) -> Result<i32, JsValue> {
    i32::try_from(days).map_err(|_| JsValue::from_str(&format!("Day count {} out of range", days)))
}

/// Converts a Gregorian date to Hijri.
///
/// # Example (JavaScript)
/// ```js
/// const h = toHijri("2024-03-11");
/// console.log(h.formatted); // "1445/09/01"
/// ```
#[wasm_bindgen(js_name = toHijri)]
pub fn to_hijri(date: &str) -> Result<JsValue, JsValue> {
    HawlEngine::default().to_hijri(date)
}

/// Converts a Hijri date (month 1-12) to a Gregorian `YYYY-MM-DD` string.
#[wasm_bindgen(js_name = toGregorian)]
pub fn to_gregorian(year: i32, month: u32, day: u32) -> Result<String, JsValue> {
    HawlEngine::default().to_gregorian(year, month, day)
}

#[wasm_bindgen(js_name = calculateHawlEndDate)]
pub fn calculate_hawl_end_date(start: &str) -> Result<String, JsValue> {
    hawl_core::hawl_end_date(parse(start)?).map(iso).map_err(js_error)
}

#[wasm_bindgen(js_name = getDaysRemainingInHawl)]
pub fn get_days_remaining_in_hawl(start: &str, now: &str) -> Result<i32, JsValue> {
    let days = hawl_core::days_remaining_in_hawl(parse(start)?, parse(now)?).map_err(js_error)?;
    days_to_js(days)
}

#[wasm_bindgen(js_name = getHawlProgress)]
pub fn get_hawl_progress(start: &str, now: &str) -> Result<f64, JsValue> {
    hawl_core::hawl_progress(parse(start)?, parse(now)?).map_err(js_error)
}

#[wasm_bindgen(js_name = isHawlCompleted)]
pub fn is_hawl_completed(start: &str, now: &str) -> Result<bool, JsValue> {
    hawl_core::is_hawl_completed(parse(start)?, parse(now)?).map_err(js_error)
}

/// Returns the Hawl status of an asset held since `start`, as seen at `now`.
///
/// # Example (JavaScript)
/// ```js
/// const s = getHawlStatus("2024-01-01", new Date().toISOString());
/// console.log(s.status, s.daysRemaining);
/// ```
#[wasm_bindgen(js_name = getHawlStatus)]
pub fn get_hawl_status(start: &str, now: &str) -> Result<JsValue, JsValue> {
    HawlEngine::default().hawl_status(start, now)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str, pattern: Option<String>) -> Result<String, JsValue> {
    let pattern = pattern.as_deref().unwrap_or(DEFAULT_DATE_PATTERN);
    hawl_core::format_date(&UmmAlQura::new(), parse(date)?, pattern).map_err(js_error)
}

#[wasm_bindgen(js_name = formatHijriDate)]
pub fn format_hijri_date(date: &str, pattern: Option<String>) -> Result<String, JsValue> {
    HawlEngine::default().format_hijri_date(date, pattern)
}

#[wasm_bindgen(js_name = getDaysBetween)]
pub fn get_days_between(a: &str, b: &str) -> Result<i32, JsValue> {
    days_to_js(hawl_core::days_between(parse(a)?, parse(b)?))
}

#[wasm_bindgen(js_name = addDays)]
pub fn add_days(date: &str, days: i32) -> Result<String, JsValue> {
    hawl_core::add_days(parse(date)?, i64::from(days)).map(iso).map_err(js_error)
}

#[wasm_bindgen(js_name = isValidDate)]
pub fn is_valid_date(input: &str) -> bool {
    hawl_core::is_valid_date(input)
}

#[wasm_bindgen(js_name = isIslamicLeapYear)]
pub fn is_islamic_leap_year(year: i32) -> Result<bool, JsValue> {
    hawl_core::is_islamic_leap_year(&UmmAlQura::new(), year).map_err(js_error)
}

#[wasm_bindgen(js_name = getCurrentIslamicYear)]
pub fn get_current_islamic_year(now: &str) -> Result<i32, JsValue> {
    let clock = FixedClock::new(parse(now)?);
    hawl_core::current_islamic_year(&UmmAlQura::new(), &clock).map_err(js_error)
}

#[wasm_bindgen(js_name = getHijriMonthNames)]
pub fn get_hijri_month_names() -> Result<JsValue, JsValue> {
    to_js(hawl_core::hijri_month_names())
}

#[wasm_bindgen(js_name = getHijriMonthNamesArabic)]
pub fn get_hijri_month_names_arabic() -> Result<JsValue, JsValue> {
    to_js(hawl_core::hijri_month_names_arabic())
}

/// Configured engine for callers that need a moon-sighting adjustment or a
/// different due-soon threshold.
///
/// # Example (JavaScript)
/// ```js
/// const engine = new HawlEngine({ adjustment: -1, dueSoonDays: 14 });
/// engine.toHijri("2024-03-11");
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct HawlEngine {
    context: HawlContext,
}

#[wasm_bindgen]
impl HawlEngine {
    /// Creates an engine from an optional `{ adjustment, dueSoonDays }` object.
    /// The snake_case `due_soon_days` key is also accepted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<HawlEngine, JsValue> {
        console_error_panic_hook::set_once();
        if config.is_undefined() || config.is_null() {
            return Ok(HawlEngine::default());
        }
        let requested: HawlContext = serde_wasm_bindgen::from_value(config)?;
        let context = hawl_core::HawlContextBuilder::new()
            .adjustment(requested.adjustment)
            .due_soon_days(requested.due_soon_days)
            .build()
            .map_err(js_error)?;
        Ok(HawlEngine { context })
    }

    #[wasm_bindgen(js_name = toHijri)]
    pub fn to_hijri(&self, date: &str) -> Result<JsValue, JsValue> {
        let date = parse(date)?;
        let hijri = hawl_core::to_hijri(&self.context.provider(), date.date_naive()).map_err(js_error)?;
        to_js(&WasmHijriDate::from(hijri))
    }

    #[wasm_bindgen(js_name = toGregorian)]
    pub fn to_gregorian(&self, year: i32, month: u32, day: u32) -> Result<String, JsValue> {
        let date = hawl_core::to_gregorian(&self.context.provider(), year, month, day).map_err(js_error)?;
        Ok(date.format("%Y-%m-%d").to_string())
    }

    #[wasm_bindgen(js_name = hawlStatus)]
    pub fn hawl_status(&self, start: &str, now: &str) -> Result<JsValue, JsValue> {
        let status = hawl_core::hawl_status_with(parse(start)?, parse(now)?, &self.context)
            .map_err(js_error)?;
        to_js(&WasmHawlStatus::from(status))
    }

    #[wasm_bindgen(js_name = formatHijriDate)]
    pub fn format_hijri_date(&self, date: &str, pattern: Option<String>) -> Result<String, JsValue> {
        let pattern = pattern.as_deref().unwrap_or(DEFAULT_HIJRI_PATTERN);
        hawl_core::format_hijri_date(&self.context.provider(), parse(date)?, pattern).map_err(js_error)
    }
}

/// WASM-friendly representation of `HijriDate` for TypeScript generation.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmHijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub month_name: String,
    pub formatted: String,
    pub formatted_arabic: String,
}

impl From<HijriDate> for WasmHijriDate {
    fn from(h: HijriDate) -> Self {
        Self {
            year: h.year,
            month: h.month,
            day: h.day,
            month_name: h.month_name().to_string(),
            formatted: h.formatted,
            formatted_arabic: h.formatted_arabic,
        }
    }
}

/// WASM-friendly representation of `HawlStatus` for TypeScript generation.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmHawlStatus {
    /// `"active"`, `"due_soon"` or `"due"`.
    pub status: String,
    pub progress: f64,
    pub days_remaining: i64,
    pub is_completed: bool,
    pub start_date: String,
    pub end_date: String,
}

impl From<HawlStatus> for WasmHawlStatus {
    fn from(s: HawlStatus) -> Self {
        Self {
            status: s.status.as_str().to_string(),
            progress: s.progress,
            days_remaining: s.days_remaining,
            is_completed: s.is_completed,
            start_date: iso(s.start_date),
            end_date: iso(s.end_date),
        }
    }
}
