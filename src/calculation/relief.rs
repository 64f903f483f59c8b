//! Untaxed relief at the minimum wage.
//!
//! An employee paid exactly the minimum wage has a fixed amount excluded
//! from the contribution and income-tax bases.

use rust_decimal::Decimal;

use crate::config::FiscalYearConfig;

/// Maximum distance from the minimum wage at which gross still counts as
/// "at the minimum wage".
pub const RELIEF_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns true when `gross` is within [`RELIEF_TOLERANCE`] of `minimum_wage`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::should_apply_relief;
/// use rust_decimal::Decimal;
///
/// let minimum_wage = Decimal::from(4050);
/// assert!(should_apply_relief(Decimal::from(4050), minimum_wage));
/// assert!(!should_apply_relief(Decimal::from(4051), minimum_wage));
/// ```
pub fn should_apply_relief(gross: Decimal, minimum_wage: Decimal) -> bool {
    (gross - minimum_wage).abs() < RELIEF_TOLERANCE
}

/// Relief granted for `gross` under `config`; zero away from the minimum wage.
pub fn untaxed_relief(gross: Decimal, config: &FiscalYearConfig) -> Decimal {
    if should_apply_relief(gross, config.minimum_wage) {
        config.relief.amount
    } else {
        Decimal::ZERO
    }
}
