//! Exchange rate model.
//!
//! The engine never fetches rates itself. Callers pass whatever rate they
//! obtained (or nothing) together with a fallback, and conversion always
//! succeeds.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::PayrollBreakdown;

/// Where an exchange rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Supplied by the caller.
    Supplied,
    /// The configured fallback, used because no usable rate was supplied.
    Fallback,
}

/// Units of foreign currency per unit of payroll currency.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ExchangeRate, RateSource};
/// use rust_decimal::Decimal;
///
/// let rate = ExchangeRate::resolve("EUR", None, None, Decimal::new(20, 2));
/// assert_eq!(rate.source, RateSource::Fallback);
/// assert_eq!(rate.convert(Decimal::from(4095)), Decimal::from(819));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// ISO 4217 code of the foreign currency.
    pub currency: String,
    /// Foreign units per payroll-currency unit.
    pub rate: Decimal,
    /// Publication date of a supplied rate, if known.
    pub as_of: Option<NaiveDate>,
    /// Whether the rate was supplied or is the fallback.
    pub source: RateSource,
}

impl ExchangeRate {
    /// Picks the supplied rate when it is positive, the fallback otherwise.
    pub fn resolve(
        currency: impl Into<String>,
        supplied: Option<Decimal>,
        as_of: Option<NaiveDate>,
        fallback: Decimal,
    ) -> Self {
        match supplied {
            Some(rate) if rate > Decimal::ZERO => Self {
                currency: currency.into(),
                rate,
                as_of,
                source: RateSource::Supplied,
            },
            _ => Self {
                currency: currency.into(),
                rate: fallback,
                as_of: None,
                source: RateSource::Fallback,
            },
        }
    }

    /// Converts a payroll-currency amount, rounded to cents.
    ///
    /// Products beyond the `Decimal` range saturate at `Decimal::MAX`
    /// (or `Decimal::MIN`).
    pub fn convert(&self, amount: Decimal) -> Decimal {
        amount
            .saturating_mul(self.rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Payroll-currency units per foreign unit, to four decimals.
    ///
    /// Returns zero for a zero rate.
    pub fn inverse(&self) -> Decimal {
        if self.rate.is_zero() {
            return Decimal::ZERO;
        }
        (Decimal::ONE / self.rate).round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Converts every monetary field of a breakdown.
    pub fn convert_breakdown(&self, breakdown: &PayrollBreakdown) -> PayrollBreakdown {
        PayrollBreakdown {
            gross: self.convert(breakdown.gross),
            cas: self.convert(breakdown.cas),
            cass: self.convert(breakdown.cass),
            tax: self.convert(breakdown.tax),
            net: self.convert(breakdown.net),
            cam: self.convert(breakdown.cam),
            employer_cost: self.convert(breakdown.employer_cost),
            taxable: self.convert(breakdown.taxable),
            personal_deduction: self.convert(breakdown.personal_deduction),
            untaxed_relief: self.convert(breakdown.untaxed_relief),
            contribution_base: self.convert(breakdown.contribution_base),
        }
    }
}
