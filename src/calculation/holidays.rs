//! Romanian legal holidays.
//!
//! This module provides the named holiday list for a year: twelve fixed
//! dates plus five dates derived from Orthodox Easter. It also provides the
//! helpers the calendar views need (grouping by month, chronological order,
//! and detection of a movable holiday landing on a fixed one).

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use super::date_utils::add_days;
use super::easter::orthodox_easter;
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayKind};

/// Fixed holidays as `(month, day, name)`.
pub const FIXED_HOLIDAYS: [(u32, u32, &str); 12] = [
    (1, 1, "Anul Nou"),
    (1, 2, "A doua zi de Anul Nou"),
    (1, 6, "Boboteaza"),
    (1, 7, "Sf. Ion"),
    (1, 24, "Unirea Principatelor"),
    (5, 1, "Ziua Muncii"),
    (6, 1, "Ziua Copilului"),
    (8, 15, "Adormirea Maicii Domnului"),
    (11, 30, "Sf. Andrei"),
    (12, 1, "Ziua Națională"),
    (12, 25, "Crăciunul"),
    (12, 26, "A doua zi de Crăciun"),
];

/// Movable holidays as `(days from Orthodox Easter Sunday, name)`.
pub const MOVABLE_HOLIDAYS: [(i64, &str); 5] = [
    (-2, "Vinerea Mare"),
    (0, "Paștele"),
    (1, "A doua zi de Paște"),
    (49, "Rusaliile"),
    (50, "A doua zi de Rusalii"),
];

/// Returns the legal holidays for `year`: fixed entries first, then movable.
///
/// Always yields 17 entries. Dates may repeat when a movable holiday falls
/// on a fixed one (Whit Monday on 1 June, for instance); such years are
/// logged and can be inspected with [`duplicate_dates`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::holidays_for_year;
/// use payroll_engine::models::HolidayKind;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2025).unwrap();
/// assert_eq!(holidays.len(), 17);
///
/// let good_friday = &holidays[12];
/// assert_eq!(good_friday.name, "Vinerea Mare");
/// assert_eq!(good_friday.kind, HolidayKind::Movable);
/// assert_eq!(good_friday.date, NaiveDate::from_ymd_opt(2025, 4, 18).unwrap());
/// ```
pub fn holidays_for_year(year: i32) -> EngineResult<Vec<Holiday>> {
    let mut holidays = Vec::with_capacity(FIXED_HOLIDAYS.len() + MOVABLE_HOLIDAYS.len());

    for (month, day, name) in FIXED_HOLIDAYS {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::DateOutOfRange { year })?;
        holidays.push(Holiday {
            date,
            name: name.to_string(),
            kind: HolidayKind::Fixed,
        });
    }

    let easter = orthodox_easter(year)?;
    for (offset, name) in MOVABLE_HOLIDAYS {
        let date = add_days(easter, offset).ok_or(EngineError::DateOutOfRange { year })?;
        holidays.push(Holiday {
            date,
            name: name.to_string(),
            kind: HolidayKind::Movable,
        });
    }

    let duplicates = duplicate_dates(&holidays);
    if !duplicates.is_empty() {
        warn!(
            year,
            coinciding = ?duplicates,
            "Movable holiday falls on a fixed holiday"
        );
    }

    Ok(holidays)
}

/// Returns the distinct holiday dates for `year`, ready for
/// [`super::working_days_by_month`].
pub fn holiday_dates(year: i32) -> EngineResult<HashSet<NaiveDate>> {
    Ok(holidays_for_year(year)?.into_iter().map(|h| h.date).collect())
}

/// Dates that appear more than once in `holidays`, in ascending order.
pub fn duplicate_dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
    let mut seen = HashSet::with_capacity(holidays.len());
    let mut duplicates: Vec<NaiveDate> = holidays
        .iter()
        .filter(|h| !seen.insert(h.date))
        .map(|h| h.date)
        .collect();
    duplicates.sort();
    duplicates.dedup();
    duplicates
}

/// Sorts holidays by date. The sort is stable, so entries sharing a date
/// keep their fixed-then-movable order.
pub fn chronological(mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Groups holidays by zero-based month index, each group in date order.
/// Months without holidays are absent.
pub fn holidays_by_month(holidays: &[Holiday]) -> BTreeMap<u32, Vec<Holiday>> {
    let mut grouped: BTreeMap<u32, Vec<Holiday>> = BTreeMap::new();
    for holiday in chronological(holidays.to_vec()) {
        grouped.entry(holiday.date.month0()).or_default().push(holiday);
    }
    grouped
}
