//! Numeric custom fields: release year, rating, runtime.
//!
//! Only `release_year` accepts numbers typed as text. Editors enter the year
//! as free text often enough that rejecting it would blank out whole pages;
//! rating and runtime are number-typed fields in the CMS and a string there
//! means something else went wrong.

use chrono::Datelike;

use crate::record::fields::{IMDB_RATING, RELEASE_YEAR, RUNTIME_MINUTES};
use crate::record::{ContentRecord, FieldValue};

const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 10.0;

/// Release year, falling back to the current local calendar year.
pub fn release_year(record: &ContentRecord) -> i32 {
    release_year_or(record, current_year())
}

/// Release year with an explicit fallback for absent or unparseable values.
///
/// Fractional values are truncated; the year is not checked against any
/// calendar range. Values that do not fit an `i32` take the fallback.
pub fn release_year_or(record: &ContentRecord, fallback: i32) -> i32 {
    let parsed = match record.acf.get(RELEASE_YEAR) {
        FieldValue::Number(n) => Some(n),
        FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        FieldValue::Absent | FieldValue::Other => None,
    };
    parsed.and_then(year_from_f64).unwrap_or(fallback)
}

fn year_from_f64(n: f64) -> Option<i32> {
    let n = n.trunc();
    if n.is_finite() && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n) {
        Some(n as i32)
    } else {
        None
    }
}

/// Rating on a 0–10 scale. Out-of-range values are treated as entry errors
/// and dropped, not clamped.
pub fn rating(record: &ContentRecord) -> Option<f64> {
    match record.acf.get(IMDB_RATING) {
        FieldValue::Number(n) if (RATING_MIN..=RATING_MAX).contains(&n) => Some(n),
        _ => None,
    }
}

/// Runtime in minutes, exactly as stored. Any finite number is kept; deciding
/// what 0 or a negative value means is left to the caller.
pub fn runtime_minutes(record: &ContentRecord) -> Option<f64> {
    match record.acf.get(RUNTIME_MINUTES) {
        FieldValue::Number(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
