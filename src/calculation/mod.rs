//! Calculation logic for the payroll engine.
//!
//! This module contains the two independent engines. The calendar engine
//! covers date primitives, Orthodox Easter, the legal holiday list and
//! per-month working-day counts. The payroll engine covers untaxed relief,
//! the personal deduction, the gross-to-net breakdown, net-to-gross
//! bisection, the audit trail and payslip layout.

mod audit;
mod date_utils;
mod easter;
mod gross_solver;
mod holidays;
mod payroll;
mod payslip;
mod personal_deduction;
mod relief;
mod working_days;

pub use audit::audit_breakdown;
pub use date_utils::{
    ISO_DATE_FORMAT, add_days, days_in_year, format_iso, holiday_set_from_iso, parse_iso,
};
pub use easter::{EASTER_VALID_YEARS, is_easter_year_supported, orthodox_easter};
pub use gross_solver::{SOLVER_ITERATIONS, search_upper_bound, solve_gross_for_net};
pub use holidays::{
    FIXED_HOLIDAYS, MOVABLE_HOLIDAYS, chronological, duplicate_dates, holiday_dates,
    holidays_by_month, holidays_for_year,
};
pub use payroll::{compute_from_gross, percent_of, round_amount};
pub use payslip::{DEDUCTIONS_SECTION, EMPLOYEE_SECTION, EMPLOYER_SECTION, build_payslip};
pub use personal_deduction::{deduction_percentage, max_personal_deduction, personal_deduction};
pub use relief::{RELIEF_TOLERANCE, should_apply_relief, untaxed_relief};
pub use working_days::{is_working_day, working_days_by_month, working_days_summary};
