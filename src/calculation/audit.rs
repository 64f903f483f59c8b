//! Audit trail for payroll calculations.
//!
//! Explains a [`PayrollBreakdown`] as the ordered rule applications that
//! produced it, one [`AuditStep`] per rule.

use rust_decimal::Decimal;

use super::personal_deduction::{deduction_percentage, max_personal_deduction};
use crate::config::FiscalYearConfig;
use crate::models::{AuditStep, PayrollBreakdown};

fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Builds the audit steps for `breakdown`, numbered from 1.
///
/// Steps follow calculation order: untaxed relief, personal deduction,
/// social contributions, income tax, net salary, employer contribution.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{audit_breakdown, compute_from_gross};
/// use payroll_engine::config::FiscalYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = FiscalYearConfig::romania_2025();
/// let breakdown = compute_from_gross(Decimal::from(7000), 0, &config);
/// let steps = audit_breakdown(&breakdown, 0, &config);
///
/// assert_eq!(steps.len(), 6);
/// assert_eq!(steps[0].rule_id, "untaxed_relief");
/// assert_eq!(steps[5].rule_id, "employer_contribution");
/// ```
pub fn audit_breakdown(
    breakdown: &PayrollBreakdown,
    dependents: u32,
    config: &FiscalYearConfig,
) -> Vec<AuditStep> {
    let rates = &config.rates;
    let b = breakdown;

    let relief_applied = b.untaxed_relief > Decimal::ZERO;
    let relief_reasoning = if relief_applied {
        format!(
            "Gross {} equals the minimum wage {}: {} excluded from contribution and tax bases",
            amount(b.gross),
            amount(config.minimum_wage),
            amount(b.untaxed_relief)
        )
    } else {
        format!(
            "Gross {} differs from the minimum wage {}: no untaxed relief",
            amount(b.gross),
            amount(config.minimum_wage)
        )
    };

    let max_deduction = max_personal_deduction(dependents, config);
    let ceiling = config.minimum_wage + config.personal_deduction.phase_out_band;
    let deduction_reasoning = if b.gross <= config.minimum_wage {
        format!(
            "Gross at or below the minimum wage: full deduction {} ({} dependents)",
            amount(max_deduction),
            dependents
        )
    } else if b.gross >= ceiling {
        format!(
            "Gross {} at or above {}: deduction fully phased out",
            amount(b.gross),
            amount(ceiling)
        )
    } else {
        format!(
            "{} × ({} − {}) / {} = {}",
            amount(max_deduction),
            amount(ceiling),
            amount(b.gross),
            amount(config.personal_deduction.phase_out_band),
            amount(b.personal_deduction)
        )
    };

    vec![
        AuditStep {
            step_number: 1,
            rule_id: "untaxed_relief".to_string(),
            rule_name: "Untaxed Relief".to_string(),
            input: serde_json::json!({
                "gross": amount(b.gross),
                "minimum_wage": amount(config.minimum_wage),
                "relief_amount": amount(config.relief.amount)
            }),
            output: serde_json::json!({
                "applied": relief_applied,
                "untaxed_relief": amount(b.untaxed_relief)
            }),
            reasoning: relief_reasoning,
        },
        AuditStep {
            step_number: 2,
            rule_id: "personal_deduction".to_string(),
            rule_name: "Personal Deduction".to_string(),
            input: serde_json::json!({
                "gross": amount(b.gross),
                "dependents": dependents,
                "percentage": amount(deduction_percentage(dependents, config)),
                "phase_out_band": amount(config.personal_deduction.phase_out_band)
            }),
            output: serde_json::json!({
                "max_deduction": amount(max_deduction),
                "personal_deduction": amount(b.personal_deduction)
            }),
            reasoning: deduction_reasoning,
        },
        AuditStep {
            step_number: 3,
            rule_id: "social_contributions".to_string(),
            rule_name: "Social Contributions".to_string(),
            input: serde_json::json!({
                "contribution_base": amount(b.contribution_base),
                "cas_rate": amount(rates.cas),
                "cass_rate": amount(rates.cass),
                "rounding": config.rounding
            }),
            output: serde_json::json!({
                "cas": amount(b.cas),
                "cass": amount(b.cass)
            }),
            reasoning: format!(
                "CAS {}% and CASS {}% of base {}: {} + {}",
                amount(rates.cas),
                amount(rates.cass),
                amount(b.contribution_base),
                amount(b.cas),
                amount(b.cass)
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "income_tax".to_string(),
            rule_name: "Income Tax".to_string(),
            input: serde_json::json!({
                "gross": amount(b.gross),
                "cas": amount(b.cas),
                "cass": amount(b.cass),
                "personal_deduction": amount(b.personal_deduction),
                "untaxed_relief": amount(b.untaxed_relief),
                "tax_rate": amount(rates.tax)
            }),
            output: serde_json::json!({
                "taxable": amount(b.taxable),
                "tax": amount(b.tax)
            }),
            reasoning: format!(
                "{}% of taxable base {} = {}",
                amount(rates.tax),
                amount(b.taxable),
                amount(b.tax)
            ),
        },
        AuditStep {
            step_number: 5,
            rule_id: "net_salary".to_string(),
            rule_name: "Net Salary".to_string(),
            input: serde_json::json!({
                "gross": amount(b.gross),
                "withholdings": amount(b.employee_withholdings())
            }),
            output: serde_json::json!({
                "net": amount(b.net)
            }),
            reasoning: format!(
                "{} − {} − {} − {} = {}",
                amount(b.gross),
                amount(b.cas),
                amount(b.cass),
                amount(b.tax),
                amount(b.net)
            ),
        },
        AuditStep {
            step_number: 6,
            rule_id: "employer_contribution".to_string(),
            rule_name: "Employer Contribution".to_string(),
            input: serde_json::json!({
                "gross": amount(b.gross),
                "cam_rate": amount(rates.cam)
            }),
            output: serde_json::json!({
                "cam": amount(b.cam),
                "employer_cost": amount(b.employer_cost)
            }),
            reasoning: format!(
                "CAM {}% of full gross {} = {}; employer cost {}",
                amount(rates.cam),
                amount(b.gross),
                amount(b.cam),
                amount(b.employer_cost)
            ),
        },
    ]
}
