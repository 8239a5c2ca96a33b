//! Payroll audit trail.
//!
//! [`explain_payroll`] reconstructs the reasoning behind a [`PayrollResult`]
//! as an ordered list of [`AuditStep`]s, one per statutory step. It is kept
//! separate from [`compute_payroll`](super::compute_payroll) so the hot path
//! does not build strings or JSON.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationInput, PayrollResult, RulesSnapshot, TaxBasePolicy};

use super::paye::bracket_portions;

fn step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    }
}

fn fmt(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Builds the audit trail for a computed result.
///
/// `result` must be the output of `compute_payroll(input, rules)`; the steps
/// restate its figures rather than recomputing them.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{compute_payroll, explain_payroll};
/// use payroll_engine::models::{CompensationInput, RulesSnapshot};
/// use rust_decimal::Decimal;
///
/// let rules = RulesSnapshot::kenya_2025();
/// let input = CompensationInput::new(Decimal::new(40_000, 0));
/// let result = compute_payroll(&input, &rules).unwrap();
///
/// let steps = explain_payroll(&input, &rules, &result);
/// assert_eq!(steps.first().unwrap().rule_id, "gross_pay");
/// assert_eq!(steps.last().unwrap().rule_id, "net_pay");
/// ```
pub fn explain_payroll(
    input: &CompensationInput,
    rules: &RulesSnapshot,
    result: &PayrollResult,
) -> Vec<AuditStep> {
    let mut steps = Vec::with_capacity(8);

    let allowances: serde_json::Map<String, serde_json::Value> = input
        .allowances
        .iter()
        .map(|(name, amount)| (name.clone(), serde_json::Value::String(fmt(*amount))))
        .collect();
    steps.push(step(
        1,
        "gross_pay",
        "Gross Pay",
        serde_json::json!({
            "basic_salary": fmt(input.basic_salary),
            "allowances": allowances,
            "bonuses": fmt(input.bonuses),
            "overtime": fmt(input.overtime)
        }),
        serde_json::json!({ "gross_pay": fmt(result.gross_pay) }),
        format!(
            "KES {} basic + KES {} allowances + KES {} bonuses + KES {} overtime = KES {}",
            fmt(input.basic_salary),
            fmt(input.allowances_total()),
            fmt(input.bonuses),
            fmt(input.overtime),
            fmt(result.gross_pay)
        ),
    ));

    let nssf_uncapped = input
        .basic_salary
        .checked_mul(rules.nssf_employee_rate())
        .unwrap_or(Decimal::MAX);
    let nssf_capped = nssf_uncapped > rules.nssf_max_contribution();
    steps.push(step(
        2,
        "nssf",
        "NSSF Contribution",
        serde_json::json!({
            "pensionable_pay": fmt(input.basic_salary),
            "employee_rate": fmt(rules.nssf_employee_rate()),
            "employer_rate": fmt(rules.nssf_employer_rate()),
            "max_contribution": fmt(rules.nssf_max_contribution())
        }),
        serde_json::json!({
            "employee": fmt(result.nssf_employee),
            "employer": fmt(result.nssf_employer),
            "capped": nssf_capped
        }),
        if nssf_capped {
            format!(
                "KES {} x {} = KES {} exceeds the cap, contribution limited to KES {}",
                fmt(input.basic_salary),
                fmt(rules.nssf_employee_rate()),
                fmt(nssf_uncapped),
                fmt(result.nssf_employee)
            )
        } else {
            format!(
                "KES {} x {} = KES {}",
                fmt(input.basic_salary),
                fmt(rules.nssf_employee_rate()),
                fmt(result.nssf_employee)
            )
        },
    ));

    steps.push(step(
        3,
        "shif",
        "SHIF Contribution",
        serde_json::json!({
            "gross_pay": fmt(result.gross_pay),
            "employee_rate": fmt(rules.shif_employee_rate()),
            "employer_rate": fmt(rules.shif_employer_rate())
        }),
        serde_json::json!({
            "employee": fmt(result.shif_employee),
            "employer": fmt(result.shif_employer)
        }),
        format!(
            "KES {} x {} = KES {}",
            fmt(result.gross_pay),
            fmt(rules.shif_employee_rate()),
            fmt(result.shif_employee)
        ),
    ));

    steps.push(step(
        4,
        "ahl",
        "Affordable Housing Levy",
        serde_json::json!({
            "gross_pay": fmt(result.gross_pay),
            "employee_rate": fmt(rules.ahl_employee_rate()),
            "employer_rate": fmt(rules.ahl_employer_rate())
        }),
        serde_json::json!({
            "employee": fmt(result.ahl_employee),
            "employer": fmt(result.ahl_employer)
        }),
        format!(
            "KES {} x {} = KES {}",
            fmt(result.gross_pay),
            fmt(rules.ahl_employee_rate()),
            fmt(result.ahl_employee)
        ),
    ));

    let (policy, pre_tax) = match rules.tax_base_policy() {
        TaxBasePolicy::NssfOnly => ("nssf_only", "NSSF"),
        TaxBasePolicy::NssfShifAhl => ("nssf_shif_ahl", "NSSF, SHIF and AHL"),
    };
    steps.push(step(
        5,
        "taxable_pay",
        "Taxable Pay",
        serde_json::json!({
            "gross_pay": fmt(result.gross_pay),
            "tax_base_policy": policy
        }),
        serde_json::json!({ "taxable_pay": fmt(result.taxable_pay) }),
        format!(
            "KES {} gross less {} = KES {} taxable",
            fmt(result.gross_pay),
            pre_tax,
            fmt(result.taxable_pay)
        ),
    ));

    let bands: Vec<serde_json::Value> = bracket_portions(result.taxable_pay, rules.paye_schedule())
        .map(|portion| {
            serde_json::json!({
                "bracket": portion.index,
                "min": fmt(portion.bracket.min),
                "max": portion.bracket.max.map(fmt),
                "rate": fmt(portion.bracket.rate),
                "amount": fmt(portion.amount),
                "tax": fmt(portion.tax)
            })
        })
        .collect();
    let band_count = bands.len();
    steps.push(step(
        6,
        "paye_ladder",
        "PAYE Bracket Ladder",
        serde_json::json!({ "taxable_pay": fmt(result.taxable_pay) }),
        serde_json::json!({
            "bands": bands,
            "paye_gross": fmt(result.paye_gross)
        }),
        format!(
            "KES {} taxable spans {} bracket(s) for KES {} gross tax",
            fmt(result.taxable_pay),
            band_count,
            fmt(result.paye_gross)
        ),
    ));

    let forfeited = rules.personal_relief() - result.personal_relief_applied;
    steps.push(step(
        7,
        "personal_relief",
        "Personal Relief",
        serde_json::json!({
            "paye_gross": fmt(result.paye_gross),
            "personal_relief": fmt(rules.personal_relief())
        }),
        serde_json::json!({
            "relief_applied": fmt(result.personal_relief_applied),
            "relief_forfeited": fmt(forfeited),
            "paye_net": fmt(result.paye_net)
        }),
        if forfeited > Decimal::ZERO {
            format!(
                "Relief of KES {} exceeds tax of KES {}; PAYE is KES 0 and KES {} relief is forfeited",
                fmt(rules.personal_relief()),
                fmt(result.paye_gross),
                fmt(forfeited)
            )
        } else {
            format!(
                "KES {} - KES {} relief = KES {}",
                fmt(result.paye_gross),
                fmt(result.personal_relief_applied),
                fmt(result.paye_net)
            )
        },
    ));

    steps.push(step(
        8,
        "net_pay",
        "Net Pay",
        serde_json::json!({
            "gross_pay": fmt(result.gross_pay),
            "paye_net": fmt(result.paye_net),
            "nssf_employee": fmt(result.nssf_employee),
            "shif_employee": fmt(result.shif_employee),
            "ahl_employee": fmt(result.ahl_employee),
            "helb": fmt(result.helb),
            "voluntary_deductions": fmt(result.voluntary_deductions_total)
        }),
        serde_json::json!({
            "total_deductions": fmt(result.total_deductions),
            "net_pay": fmt(result.net_pay)
        }),
        format!(
            "KES {} gross - KES {} deductions = KES {}",
            fmt(result.gross_pay),
            fmt(result.total_deductions),
            fmt(result.net_pay)
        ),
    ));

    steps
}
