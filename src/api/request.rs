//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CalculationMode;

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use payroll_engine::api::CalculationRequest;
/// use payroll_engine::models::CalculationMode;
/// use rust_decimal::Decimal;
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"mode": "gross_to_net", "amount": "7000"}"#,
/// ).unwrap();
///
/// assert_eq!(request.mode, CalculationMode::GrossToNet);
/// assert_eq!(request.amount, Decimal::from(7000));
/// assert_eq!(request.dependents, 0);
/// assert!(request.year.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Whether `amount` is a gross salary or a desired net.
    pub mode: CalculationMode,
    /// Gross salary or desired net, in the payroll currency.
    pub amount: Decimal,
    /// Number of dependents for the personal deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Calendar year selecting the fiscal configuration. Defaults to the
    /// latest configured year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Foreign-currency units per payroll-currency unit. Falls back to the
    /// configured rate when absent or not positive.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
    /// Date the supplied exchange rate was published.
    #[serde(default)]
    pub exchange_rate_date: Option<NaiveDate>,
}
