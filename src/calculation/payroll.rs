//! Gross-to-net payroll calculation.
//!
//! This module turns a gross salary into a [`PayrollBreakdown`] under a
//! [`FiscalYearConfig`]: untaxed relief, personal deduction, employee
//! contributions, income tax, net pay, and the employer's contribution.

use rust_decimal::{Decimal, RoundingStrategy};

use super::personal_deduction::personal_deduction;
use super::relief::untaxed_relief;
use crate::config::FiscalYearConfig;
use crate::models::PayrollBreakdown;

/// Rounds to whole currency units, halves away from zero, when `enabled`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_amount(Decimal::new(9375, 1), true), Decimal::from(938));
/// assert_eq!(round_amount(Decimal::new(9375, 1), false), Decimal::new(9375, 1));
/// ```
pub fn round_amount(value: Decimal, enabled: bool) -> Decimal {
    if enabled {
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    } else {
        value
    }
}

/// Applies a percentage on the 0–100 scale to `base`.
pub fn percent_of(rate: Decimal, base: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED * base
}

/// Computes the full payroll breakdown for a gross salary.
///
/// Negative gross is treated as zero. The function is total: every input
/// yields a breakdown with non-negative amounts.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_from_gross;
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_from_gross(Decimal::from(4050), 0, &FiscalYearConfig::romania_2025());
/// assert_eq!(breakdown.untaxed_relief, Decimal::from(300));
/// assert_eq!(breakdown.cas, Decimal::from(938));
/// assert_eq!(breakdown.net, Decimal::from(2574));
/// ```
pub fn compute_from_gross(
    gross: Decimal,
    dependents: u32,
    config: &FiscalYearConfig,
) -> PayrollBreakdown {
    let gross = gross.max(Decimal::ZERO);
    let rates = &config.rates;
    let round = |value| round_amount(value, config.rounding);

    let relief = untaxed_relief(gross, config);
    let deduction = personal_deduction(gross, dependents, config);
    let contribution_base = (gross - relief).max(Decimal::ZERO);

    let cas = round(percent_of(rates.cas, contribution_base));
    let cass = round(percent_of(rates.cass, contribution_base));

    let taxable = (gross - cas - cass - deduction - relief).max(Decimal::ZERO);
    let tax = round(percent_of(rates.tax, taxable));

    let net = (gross - cas - cass - tax).max(Decimal::ZERO);

    let cam = round(percent_of(rates.cam, gross));
    let employer_cost = gross.saturating_add(cam);

    PayrollBreakdown {
        gross,
        cas,
        cass,
        tax,
        net,
        cam,
        employer_cost,
        taxable,
        personal_deduction: deduction,
        untaxed_relief: relief,
        contribution_base,
    }
}
