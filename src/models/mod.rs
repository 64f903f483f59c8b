//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;
mod exchange_rate;
mod holiday;
mod payslip;
mod working_days;

pub use breakdown::{CostSplit, PayrollBreakdown};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationMode, CalculationResult,
};
pub use exchange_rate::{ExchangeRate, RateSource};
pub use holiday::{Holiday, HolidayKind};
pub use payslip::{Payslip, PayslipLine, PayslipSection};
pub use working_days::{MonthWorkingDays, WorkingDaysSummary};
