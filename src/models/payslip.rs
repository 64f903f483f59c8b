//! Payslip model.
//!
//! A [`Payslip`] is the print-ready shape of a [`super::PayrollBreakdown`]:
//! labelled rows grouped into sections with amounts in whole currency units.
//! Rendering it (PDF, HTML, plain text) is left to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labelled amount on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// Row label, including the rate where one applies (e.g., "CAS (25%)").
    pub label: String,
    /// Amount in whole currency units.
    pub amount: Decimal,
}

/// A titled group of payslip rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipSection {
    /// Section heading.
    pub title: String,
    /// Rows in display order.
    pub lines: Vec<PayslipLine>,
}

/// A complete payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Number of dependents the calculation used.
    pub dependents: u32,
    /// Gross salary in whole currency units.
    pub gross: Decimal,
    /// Employee, employer and (when any apply) deduction sections.
    pub sections: Vec<PayslipSection>,
    /// Net salary in whole currency units.
    pub net: Decimal,
}

impl Payslip {
    /// Finds a section by title.
    pub fn section(&self, title: &str) -> Option<&PayslipSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}
