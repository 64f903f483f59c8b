//! Calendar primitives shared by the holiday and working-day calculators.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// ISO-8601 calendar date format (`YYYY-MM-DD`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::format_iso;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(format_iso(date), "2025-01-06");
/// ```
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| EngineError::InvalidInput {
        field: "date".to_string(),
        message: format!("'{}' is not a YYYY-MM-DD date: {}", value, e),
    })
}

/// Shifts a date by a signed number of days.
///
/// Returns `None` only when the result falls outside the representable
/// calendar.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::add_days;
/// use chrono::NaiveDate;
///
/// let easter = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
/// assert_eq!(add_days(easter, -2), NaiveDate::from_ymd_opt(2025, 4, 18));
/// assert_eq!(add_days(easter, 49), NaiveDate::from_ymd_opt(2025, 6, 8));
/// ```
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Number of days in a calendar year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Builds a holiday set from ISO date strings.
///
/// For callers that keep dates as text; fails on the first malformed entry.
pub fn holiday_set_from_iso<'a, I>(dates: I) -> EngineResult<HashSet<NaiveDate>>
where
    I: IntoIterator<Item = &'a str>,
{
    dates.into_iter().map(parse_iso).collect()
}
