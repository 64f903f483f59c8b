//! Payslip assembly.

use rust_decimal::Decimal;

use super::payroll::round_amount;
use crate::config::Rates;
use crate::models::{PayrollBreakdown, Payslip, PayslipLine, PayslipSection};

/// Title of the employee-withholdings section.
pub const EMPLOYEE_SECTION: &str = "Angajat";
/// Title of the employer-cost section.
pub const EMPLOYER_SECTION: &str = "Angajator";
/// Title of the applied-deductions section.
pub const DEDUCTIONS_SECTION: &str = "Deduceri aplicate";

fn line(label: String, amount: Decimal) -> PayslipLine {
    PayslipLine {
        label,
        amount: round_amount(amount, true),
    }
}

/// Lays out `breakdown` as a payslip with amounts in whole currency units.
///
/// The deductions section is present only when the personal deduction or
/// the untaxed relief is non-zero, and lists only the non-zero ones.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{build_payslip, compute_from_gross};
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = FiscalYearConfig::romania_2025();
/// let breakdown = compute_from_gross(Decimal::from(7000), 0, &config);
/// let payslip = build_payslip(&breakdown, 0, &config.rates);
///
/// assert_eq!(payslip.sections.len(), 2);
/// assert_eq!(payslip.section("Angajat").unwrap().lines[0].label, "CAS (25%)");
/// assert_eq!(payslip.net, Decimal::from(4095));
/// ```
pub fn build_payslip(breakdown: &PayrollBreakdown, dependents: u32, rates: &Rates) -> Payslip {
    let b = breakdown;
    let mut sections = vec![
        PayslipSection {
            title: EMPLOYEE_SECTION.to_string(),
            lines: vec![
                line(format!("CAS ({}%)", rates.cas.normalize()), b.cas),
                line(format!("CASS ({}%)", rates.cass.normalize()), b.cass),
                line("Bază impozabilă".to_string(), b.taxable),
                line(format!("Impozit pe venit ({}%)", rates.tax.normalize()), b.tax),
            ],
        },
        PayslipSection {
            title: EMPLOYER_SECTION.to_string(),
            lines: vec![
                line(format!("CAM ({}%)", rates.cam.normalize()), b.cam),
                line("Cost total angajator".to_string(), b.employer_cost),
            ],
        },
    ];

    let mut deductions = Vec::new();
    if b.personal_deduction > Decimal::ZERO {
        deductions.push(line("Deducere personală".to_string(), b.personal_deduction));
    }
    if b.untaxed_relief > Decimal::ZERO {
        deductions.push(line(
            format!("{} lei netaxabili", b.untaxed_relief.normalize()),
            b.untaxed_relief,
        ));
    }
    if !deductions.is_empty() {
        sections.push(PayslipSection {
            title: DEDUCTIONS_SECTION.to_string(),
            lines: deductions,
        });
    }

    Payslip {
        dependents,
        gross: round_amount(b.gross, true),
        sections,
        net: round_amount(b.net, true),
    }
}
