//! Orthodox Easter date calculation.
//!
//! Uses the Meeus congruence for the Julian calendar and shifts the result
//! by 13 days into the Gregorian calendar. The fixed 13-day offset is only
//! correct for 1900–2099.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Years for which [`orthodox_easter`] is guaranteed correct.
pub const EASTER_VALID_YEARS: RangeInclusive<i32> = 1900..=2099;

/// Julian-to-Gregorian offset valid throughout [`EASTER_VALID_YEARS`].
const JULIAN_TO_GREGORIAN_DAYS: u64 = 13;

/// Returns true when `year` lies in the window where the formula is exact.
pub fn is_easter_year_supported(year: i32) -> bool {
    EASTER_VALID_YEARS.contains(&year)
}

/// Computes Orthodox Easter Sunday as a Gregorian date.
///
/// Any year is accepted. Outside [`EASTER_VALID_YEARS`] the date is not
/// guaranteed correct and a warning is logged. The only error is a year
/// whose dates the calendar type cannot represent.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::orthodox_easter;
/// use chrono::NaiveDate;
///
/// assert_eq!(orthodox_easter(2025).unwrap(), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// assert_eq!(orthodox_easter(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
/// ```
pub fn orthodox_easter(year: i32) -> EngineResult<NaiveDate> {
    if !is_easter_year_supported(year) {
        warn!(year, "Orthodox Easter requested outside 1900-2099; date may be inaccurate");
    }

    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = ((d + e + 114) / 31) as u32;
    let day = ((d + e + 114) % 31 + 1) as u64;

    // Julian day-of-month plus the offset may run past the month end;
    // adding from the first of the month lets the calendar roll it over.
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(day - 1 + JULIAN_TO_GREGORIAN_DAYS)))
        .ok_or(EngineError::DateOutOfRange { year })
}
