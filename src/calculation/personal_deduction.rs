//! Personal deduction calculation.
//!
//! The maximum deduction is a percentage of the minimum wage chosen by the
//! number of dependents. It applies in full up to the minimum wage, then
//! decreases linearly to zero across the phase-out band.

use rust_decimal::Decimal;

use crate::config::FiscalYearConfig;

/// Fraction of the minimum wage granted for `dependents`.
///
/// Counts beyond the end of the table use its last entry. An empty table
/// grants nothing.
pub fn deduction_percentage(dependents: u32, config: &FiscalYearConfig) -> Decimal {
    let table = &config.personal_deduction.percentages;
    let index = usize::try_from(dependents).unwrap_or(usize::MAX);
    table
        .get(index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(Decimal::ZERO)
}

/// Deduction granted at or below the minimum wage.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::max_personal_deduction;
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = FiscalYearConfig::romania_2025();
/// assert_eq!(max_personal_deduction(0, &config), Decimal::from(810));
/// assert_eq!(max_personal_deduction(9, &config), Decimal::new(18225, 1));
/// ```
pub fn max_personal_deduction(dependents: u32, config: &FiscalYearConfig) -> Decimal {
    deduction_percentage(dependents, config) * config.minimum_wage
}

/// Personal deduction for `gross`.
///
/// - `gross <= minimum_wage`: the maximum deduction
/// - `gross >= minimum_wage + band`: zero
/// - otherwise: `max * (minimum_wage + band - gross) / band`
///
/// The result is not rounded.
pub fn personal_deduction(gross: Decimal, dependents: u32, config: &FiscalYearConfig) -> Decimal {
    let max = max_personal_deduction(dependents, config);
    let band = config.personal_deduction.phase_out_band;
    let ceiling = config.minimum_wage + band;

    if gross <= config.minimum_wage {
        max
    } else if gross >= ceiling || band <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        max * (ceiling - gross) / band
    }
}
