//! Legal holiday model.
//!
//! This module contains the [`Holiday`] type produced by the holiday provider
//! and consumed by the working-days calculator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Same month and day every year.
    Fixed,
    /// Offset by a fixed number of days from Orthodox Easter Sunday.
    Movable,
}

/// A named legal holiday.
///
/// The date serializes as an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayKind};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     name: "Ziua Națională".to_string(),
///     kind: HolidayKind::Fixed,
/// };
///
/// let json = serde_json::to_string(&holiday).unwrap();
/// assert!(json.contains("\"date\":\"2025-12-01\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The official name of the holiday.
    pub name: String,
    /// Whether the date is fixed or derived from Easter.
    pub kind: HolidayKind,
}
