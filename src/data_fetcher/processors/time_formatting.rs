//! Timestamp decoding and presentation formatting
//!
//! Providers encode start times as either epoch milliseconds or ISO-8601
//! strings. Everything is decoded to timezone-aware UTC instants; naive
//! timestamps never leave this module. Conversion to KST is a presentation
//! policy applied explicitly by callers, never inside normalization.

use crate::constants::KST_OFFSET_SECONDS;
use crate::error::AppError;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde_json::Value;

/// Decodes a raw start-time value into a UTC instant.
///
/// Numbers are interpreted as epoch milliseconds in UTC; strings are
/// parsed as ISO-8601 / RFC 3339 (a trailing `Z` reads as UTC offset).
/// Anything else, including unparseable strings, yields `None` so the
/// caller can decide whether the record is salvageable.
///
/// # Examples
///
/// ```
/// use esports_schedule::data_fetcher::processors::parse_start_time;
/// use serde_json::json;
///
/// let from_millis = parse_start_time(&json!(1700000000000_i64)).unwrap();
/// let from_iso = parse_start_time(&json!("2023-11-14T22:13:20Z")).unwrap();
/// assert_eq!(from_millis, from_iso);
/// ```
pub fn parse_start_time(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::Number(n) => {
            let millis = n.as_i64()?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    }
}

/// Converts a UTC instant to Korea Standard Time (UTC+9).
///
/// Presentation-layer policy: the normalization core stays in UTC, and
/// call sites that render for a KST audience opt in here.
pub fn to_kst(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECONDS)
        .expect("KST offset is a valid fixed offset");
    instant.with_timezone(&kst)
}

/// Formats an instant in KST for display, e.g. "2025-03-01 17:00 KST".
pub fn format_kst(instant: DateTime<Utc>) -> String {
    to_kst(instant).format("%Y-%m-%d %H:%M KST").to_string()
}

/// Parses a user-supplied `YYYY-MM` month argument.
pub fn parse_year_month(input: &str) -> Result<(i32, u32), AppError> {
    let (year_str, month_str) = input.split_once('-').ok_or_else(|| {
        AppError::datetime_parse_error(format!("Expected YYYY-MM, got '{input}'"))
    })?;
    let year = year_str
        .parse::<i32>()
        .map_err(|e| AppError::datetime_parse_error(format!("Invalid year in '{input}': {e}")))?;
    let month = month_str
        .parse::<u32>()
        .map_err(|e| AppError::datetime_parse_error(format!("Invalid month in '{input}': {e}")))?;
    if !(1..=12).contains(&month) {
        return Err(AppError::datetime_parse_error(format!(
            "Month out of range in '{input}'"
        )));
    }
    Ok((year, month))
}
