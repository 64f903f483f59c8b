//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the jurisdiction the configuration describes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "RO").
    pub code: String,
    /// Human-readable jurisdiction name.
    pub name: String,
    /// ISO 4217 code of the payroll currency (e.g., "RON").
    pub currency: String,
    /// URL to the official legislation.
    pub source_url: String,
}

/// Contribution and tax rates, as percentages on a 0–100 scale.
///
/// Each rate is applied as `rate / 100 * base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rates {
    /// Employee pension contribution (CAS).
    pub cas: Decimal,
    /// Employee health-insurance contribution (CASS).
    pub cass: Decimal,
    /// Income tax.
    pub tax: Decimal,
    /// Employer work-insurance contribution (CAM), charged on full gross.
    pub cam: Decimal,
}

/// Personal deduction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PersonalDeductionConfig {
    /// Fraction of the minimum wage granted as the maximum deduction, indexed
    /// by number of dependents. The last entry applies to every higher count.
    pub percentages: Vec<Decimal>,
    /// Width of the band above the minimum wage over which the deduction
    /// decreases linearly to zero.
    pub phase_out_band: Decimal,
}

/// Untaxed allowance granted at the minimum wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReliefConfig {
    /// Amount excluded from the contribution and tax bases.
    pub amount: Decimal,
}

/// Everything needed to run a payroll calculation for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FiscalYearConfig {
    /// The first calendar year these parameters apply to.
    pub year: i32,
    /// Gross minimum wage.
    pub minimum_wage: Decimal,
    /// Round every intermediate amount to whole currency units.
    pub rounding: bool,
    /// Contribution and tax rates.
    pub rates: Rates,
    /// Personal deduction parameters.
    pub personal_deduction: PersonalDeductionConfig,
    /// Untaxed allowance at the minimum wage.
    pub relief: ReliefConfig,
}

impl FiscalYearConfig {
    /// The 2025 Romanian regime: minimum wage 4050, CAS 25%, CASS 10%,
    /// income tax 10%, CAM 2.25%, 300 untaxed at the minimum wage.
    ///
    /// Mirrors `config/ro/years/2025.yaml`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::FiscalYearConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = FiscalYearConfig::romania_2025();
    /// assert_eq!(config.minimum_wage, Decimal::from(4050));
    /// assert!(config.rounding);
    /// ```
    pub fn romania_2025() -> Self {
        Self {
            year: 2025,
            minimum_wage: Decimal::from(4050),
            rounding: true,
            rates: Rates {
                cas: Decimal::from(25),
                cass: Decimal::from(10),
                tax: Decimal::from(10),
                cam: Decimal::new(225, 2),
            },
            personal_deduction: PersonalDeductionConfig {
                percentages: vec![
                    Decimal::new(20, 2),
                    Decimal::new(25, 2),
                    Decimal::new(30, 2),
                    Decimal::new(35, 2),
                    Decimal::new(45, 2),
                ],
                phase_out_band: Decimal::from(2000),
            },
            relief: ReliefConfig {
                amount: Decimal::from(300),
            },
        }
    }

    /// Returns a copy with rounding switched on or off.
    pub fn with_rounding(mut self, rounding: bool) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Currency conversion settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code of the display currency (e.g., "EUR").
    pub foreign_currency: String,
    /// Units of foreign currency per unit of payroll currency, used when no
    /// live rate is supplied.
    pub fallback_rate: Decimal,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    currency: CurrencyConfig,
    /// Fiscal years sorted oldest first.
    years: Vec<FiscalYearConfig>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        currency: CurrencyConfig,
        years: Vec<FiscalYearConfig>,
    ) -> Self {
        let mut sorted_years = years;
        sorted_years.sort_by_key(|y| y.year);
        Self {
            metadata,
            currency,
            years: sorted_years,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the currency settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    /// Returns all fiscal-year configurations, oldest first.
    pub fn years(&self) -> &[FiscalYearConfig] {
        &self.years
    }
}
