//! Working-day counting.
//!
//! A working day is any weekday (Monday to Friday) that is not a legal
//! holiday. Months are walked day by day with the calendar's successor
//! function, so month lengths and leap years come from the date type.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::holidays::holiday_dates;
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthWorkingDays, WorkingDaysSummary};

/// Returns true when `date` is neither a weekend day nor in `holidays`.
pub fn is_working_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Counts calendar and working days for each month of `year`.
///
/// Holidays outside `year` are ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{holiday_dates, working_days_by_month};
///
/// let months = working_days_by_month(2025, &holiday_dates(2025).unwrap()).unwrap();
/// assert_eq!(months.len(), 12);
/// assert_eq!(months[0].total, 31);
/// assert_eq!(months[0].work, 18);
/// ```
pub fn working_days_by_month(
    year: i32,
    holidays: &HashSet<NaiveDate>,
) -> EngineResult<Vec<MonthWorkingDays>> {
    (1..=12)
        .map(|month| count_month(year, month, holidays))
        .collect()
}

fn count_month(
    year: i32,
    month: u32,
    holidays: &HashSet<NaiveDate>,
) -> EngineResult<MonthWorkingDays> {
    let mut day = NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::DateOutOfRange { year })?;
    let mut total = 0;
    let mut work = 0;

    loop {
        total += 1;
        if is_working_day(day, holidays) {
            work += 1;
        }
        match day.succ_opt() {
            Some(next) if next.month() == month => day = next,
            _ => break,
        }
    }

    Ok(MonthWorkingDays {
        month: month - 1,
        total,
        work,
    })
}

/// Builds the annual working-day table for `year` from its legal holidays.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::working_days_summary;
///
/// let summary = working_days_summary(2025).unwrap();
/// assert_eq!(summary.total_days, 365);
/// assert_eq!(summary.total_work, 248);
/// assert_eq!(summary.hours_at_8h, 1984);
/// ```
pub fn working_days_summary(year: i32) -> EngineResult<WorkingDaysSummary> {
    let holidays = holiday_dates(year)?;
    let months = working_days_by_month(year, &holidays)?;
    Ok(WorkingDaysSummary::new(year, months))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn work_days(year: i32) -> Vec<u32> {
        working_days_by_month(year, &holiday_dates(year).unwrap())
            .unwrap()
            .iter()
            .map(|m| m.work)
            .collect()
    }

    // ==========================================================================
    // WD-001: January 2025 has 31 days, 18 of them working
    // ==========================================================================
    #[test]
    fn test_wd_001_january_2025() {
        let months = working_days_by_month(2025, &holiday_dates(2025).unwrap()).unwrap();
        assert_eq!(months[0], MonthWorkingDays { month: 0, total: 31, work: 18 });
    }

    #[test]
    fn test_wd_002_full_year_2025() {
        assert_eq!(
            work_days(2025),
            vec![18, 20, 21, 20, 21, 20, 23, 20, 22, 23, 20, 20]
        );
    }

    #[test]
    fn test_wd_003_leap_year_2024() {
        let months = working_days_by_month(2024, &holiday_dates(2024).unwrap()).unwrap();
        assert_eq!(months[1].total, 29);
        assert_eq!(
            months.iter().map(|m| m.work).collect::<Vec<_>>(),
            vec![20, 21, 21, 22, 20, 19, 23, 21, 21, 23, 21, 20]
        );
        assert_eq!(months.iter().map(|m| m.total).sum::<u32>(), 366);
    }

    #[test]
    fn test_coinciding_holiday_counted_once() {
        assert_eq!(work_days(2026).iter().sum::<u32>(), 250);
    }

    #[test]
    fn test_no_holidays_counts_weekdays_only() {
        let months = working_days_by_month(2025, &HashSet::new()).unwrap();
        // January 2025 starts on a Wednesday: 23 weekdays.
        assert_eq!(months[0].work, 23);
        assert_eq!(months.iter().map(|m| m.work).sum::<u32>(), 261);
    }

    #[test]
    fn test_weekend_holiday_does_not_reduce_work() {
        // 2025-11-30 is a Sunday.
        let holidays: HashSet<_> = [date(2025, 11, 30)].into_iter().collect();
        let months = working_days_by_month(2025, &holidays).unwrap();
        assert_eq!(months[10].work, 20);
    }

    #[test]
    fn test_month_indices_are_zero_based() {
        let months = working_days_by_month(2025, &HashSet::new()).unwrap();
        let indices: Vec<u32> = months.iter().map(|m| m.month).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_is_working_day() {
        let holidays = holiday_dates(2025).unwrap();
        assert!(!is_working_day(date(2025, 1, 1), &holidays));
        assert!(!is_working_day(date(2025, 1, 4), &holidays));
        assert!(is_working_day(date(2025, 1, 3), &holidays));
    }

    #[test]
    fn test_summary_totals() {
        let summary = working_days_summary(2025).unwrap();
        assert_eq!(summary.total_work, 248);
        assert_eq!(summary.hours_at_7h, 1736);
        assert_eq!(working_days_summary(2028).unwrap().total_work, 247);
    }
}
