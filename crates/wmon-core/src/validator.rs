//! Stateless validation of meter readings before they enter the store.
//!
//! All functions here are pure predicates over their inputs (plus the system
//! clock for the date window) and are safe to call concurrently. They check
//! format and range only; existence in the meter registry is a separate
//! concern handled by the monitor.

use chrono::{Local, Months, NaiveDate};

/// The largest daily usage, in liters, accepted as a plausible reading.
pub const MAX_USAGE_LITERS: f64 = 10_000.0;

/// Checks whether a meter ID is non-blank and matches the expected shape.
///
/// The shape is `WM` followed by exactly three decimal digits (e.g. `WM001`),
/// case-sensitive. Surrounding whitespace is not stripped before the shape
/// check, so `" WM001"` is rejected.
#[must_use]
pub fn is_valid_meter_id(id: &str) -> bool {
    if id.trim().is_empty() {
        return false;
    }
    let Some(digits) = id.strip_prefix("WM") else {
        return false;
    };
    digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Checks whether a usage amount falls within the accepted daily range.
///
/// Accepts `0.0..=10000.0` liters inclusive. NaN is rejected.
#[must_use]
pub fn is_valid_usage_amount(amount: f64) -> bool {
    (0.0..=MAX_USAGE_LITERS).contains(&amount)
}

/// Checks whether a date is acceptable for usage recording.
///
/// The date must fall within the inclusive window from one year ago to today,
/// where "today" comes from the local system clock.
#[must_use]
pub fn is_valid_date(date: NaiveDate) -> bool {
    is_valid_date_on(date, Local::now().date_naive())
}

/// Checks the recording window against an explicit reference date.
///
/// The window is `[today - 1 year, today]` inclusive. A year back from a leap
/// day clamps to the end of February, matching calendar subtraction.
#[must_use]
pub fn is_valid_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    today
        .checked_sub_months(Months::new(12))
        .is_some_and(|one_year_ago| date >= one_year_ago && date <= today)
}
