//! Working-day models.
//!
//! This module contains [`MonthWorkingDays`], one row of the per-month
//! working-day table, and [`WorkingDaysSummary`], the annual roll-up.

use serde::{Deserialize, Serialize};

/// Calendar and working days in a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWorkingDays {
    /// Zero-based month index (0 = January, 11 = December).
    pub month: u32,
    /// Every calendar day in the month.
    pub total: u32,
    /// Days that are neither weekend days nor holidays.
    pub work: u32,
}

/// Annual working-day table with totals.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{MonthWorkingDays, WorkingDaysSummary};
///
/// let summary = WorkingDaysSummary::new(
///     2025,
///     vec![
///         MonthWorkingDays { month: 0, total: 31, work: 18 },
///         MonthWorkingDays { month: 1, total: 28, work: 20 },
///     ],
/// );
///
/// assert_eq!(summary.total_work, 38);
/// assert_eq!(summary.hours_at_8h, 304);
/// assert_eq!(summary.hours_at_7h, 266);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysSummary {
    /// The calendar year.
    pub year: i32,
    /// One entry per month, January first.
    pub months: Vec<MonthWorkingDays>,
    /// Sum of calendar days across the months.
    pub total_days: u32,
    /// Sum of working days across the months.
    pub total_work: u32,
    /// Working hours at an 8-hour day.
    pub hours_at_8h: u32,
    /// Working hours at a 7-hour day.
    pub hours_at_7h: u32,
}

impl WorkingDaysSummary {
    /// Builds a summary, computing the totals from the month rows.
    pub fn new(year: i32, months: Vec<MonthWorkingDays>) -> Self {
        let total_days = months.iter().map(|m| m.total).sum();
        let total_work: u32 = months.iter().map(|m| m.work).sum();
        Self {
            year,
            months,
            total_days,
            total_work,
            hours_at_8h: total_work * 8,
            hours_at_7h: total_work * 7,
        }
    }
}
