//! Payroll breakdown model.
//!
//! This module contains [`PayrollBreakdown`], the complete gross-to-net
//! result, and [`CostSplit`], the share of the employer's cost that reaches
//! the employee versus the state.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The full gross-to-net breakdown for one salary.
///
/// All monetary fields are non-negative. When rounding is enabled they are
/// whole currency units, except `personal_deduction` and `taxable`, which
/// follow the linear deduction curve.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_from_gross;
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_from_gross(Decimal::from(7000), 0, &FiscalYearConfig::romania_2025());
/// assert_eq!(breakdown.net, Decimal::from(4095));
/// assert_eq!(breakdown.employer_cost, Decimal::from(7158));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Gross salary the breakdown was computed for.
    pub gross: Decimal,
    /// Employee pension contribution (CAS).
    pub cas: Decimal,
    /// Employee health-insurance contribution (CASS).
    pub cass: Decimal,
    /// Income tax.
    pub tax: Decimal,
    /// Net salary.
    pub net: Decimal,
    /// Employer work-insurance contribution (CAM).
    pub cam: Decimal,
    /// Total cost to the employer (gross plus CAM).
    pub employer_cost: Decimal,
    /// Income-tax base.
    pub taxable: Decimal,
    /// Personal deduction applied to the tax base.
    pub personal_deduction: Decimal,
    /// Untaxed allowance excluded from every base (zero unless at minimum wage).
    pub untaxed_relief: Decimal,
    /// Base for CAS and CASS.
    pub contribution_base: Decimal,
}

/// Percentages of the employer's total cost kept by the employee and paid
/// to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSplit {
    /// Net salary as a percentage of employer cost.
    pub employee_pct: Decimal,
    /// Contributions and taxes as a percentage of employer cost.
    pub state_pct: Decimal,
}

impl PayrollBreakdown {
    /// Sum of every employee-side withholding (CAS, CASS, income tax).
    pub fn employee_withholdings(&self) -> Decimal {
        self.cas + self.cass + self.tax
    }

    /// Everything the state collects (employee withholdings plus CAM).
    pub fn state_take(&self) -> Decimal {
        self.employer_cost - self.net
    }

    /// Splits the employer's cost between employee and state, to one decimal.
    ///
    /// A zero employer cost yields a zero split.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::compute_from_gross;
    /// use payroll_engine::config::FiscalYearConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let breakdown = compute_from_gross(Decimal::from(7000), 0, &FiscalYearConfig::romania_2025());
    /// let split = breakdown.cost_split();
    /// assert_eq!(split.employee_pct, Decimal::new(572, 1));
    /// assert_eq!(split.state_pct, Decimal::new(428, 1));
    /// ```
    pub fn cost_split(&self) -> CostSplit {
        if self.employer_cost <= Decimal::ZERO {
            return CostSplit {
                employee_pct: Decimal::ZERO,
                state_pct: Decimal::ZERO,
            };
        }

        let employee_pct = (self.net / self.employer_cost * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

        // The state share is the complement so the two always total 100.
        CostSplit {
            employee_pct,
            state_pct: Decimal::ONE_HUNDRED - employee_pct,
        }
    }
}
