//! Calculation result models for the payroll engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a payroll calculation, including
//! the breakdown, converted amounts, the payslip and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CostSplit, ExchangeRate, PayrollBreakdown, Payslip};

/// Direction of a payroll calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CalculationMode;
///
/// let mode: CalculationMode = serde_json::from_str("\"net_to_gross\"").unwrap();
/// assert_eq!(mode, CalculationMode::NetToGross);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// The amount is a gross salary; compute the net.
    GrossToNet,
    /// The amount is a desired net salary; solve for the gross.
    NetToGross,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Direction of the calculation.
    pub mode: CalculationMode,
    /// The amount the caller asked about (gross or desired net), after clamping.
    pub requested_amount: Decimal,
    /// The fiscal-year configuration that was applied.
    pub fiscal_year: i32,
    /// Number of dependents used for the personal deduction.
    pub dependents: u32,
    /// Gross-to-net breakdown in the payroll currency.
    pub breakdown: PayrollBreakdown,
    /// Employee versus state share of the employer cost.
    pub cost_split: CostSplit,
    /// Rate used for the converted amounts.
    pub exchange_rate: ExchangeRate,
    /// The breakdown expressed in the foreign currency.
    pub converted: PayrollBreakdown,
    /// Print-ready payslip.
    pub payslip: Payslip,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
