//! Net-to-gross inversion.
//!
//! Finds the gross salary that yields a desired net by bisection on
//! [`compute_from_gross`]. The iteration count is fixed so results are
//! reproducible to the last digit.

use rust_decimal::Decimal;
use tracing::debug;

use super::payroll::compute_from_gross;
use crate::config::FiscalYearConfig;

/// Number of bisection steps.
pub const SOLVER_ITERATIONS: u32 = 50;

/// Upper end of the search interval for `target_net`: `max(1, 3 * target + 10000)`.
pub fn search_upper_bound(target_net: Decimal) -> Decimal {
    target_net
        .saturating_mul(Decimal::from(3))
        .saturating_add(Decimal::from(10_000))
        .max(Decimal::ONE)
}

/// Solves for the gross salary whose net equals `target_net`.
///
/// Returns the upper end of the final bracket, so the net of the returned
/// gross is never below a reachable target. Negative targets are treated
/// as zero.
///
/// Net is not monotonic at the minimum wage: the untaxed relief makes the
/// net at exactly the minimum wage higher than just above it. A target
/// slightly above the net at `minimum_wage + 0.5` can converge onto the
/// edge of the relief window and overshoot by the relief's effect.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{compute_from_gross, solve_gross_for_net};
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = FiscalYearConfig::romania_2025();
/// let gross = solve_gross_for_net(Decimal::from(4095), 0, &config);
/// let net = compute_from_gross(gross, 0, &config).net;
/// assert!((net - Decimal::from(4095)).abs() <= Decimal::ONE);
/// ```
pub fn solve_gross_for_net(
    target_net: Decimal,
    dependents: u32,
    config: &FiscalYearConfig,
) -> Decimal {
    let target = target_net.max(Decimal::ZERO);
    let mut lo = Decimal::ZERO;
    let mut hi = search_upper_bound(target);

    for _ in 0..SOLVER_ITERATIONS {
        let mid = lo + (hi - lo) / Decimal::TWO;
        if compute_from_gross(mid, dependents, config).net < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    debug!(
        target = %target,
        gross = %hi,
        bracket = %(hi - lo),
        "Net-to-gross bisection finished"
    );

    hi
}
