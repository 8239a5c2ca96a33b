//! Payroll computation.
//!
//! [`compute_payroll`] is the single entry point that turns a compensation
//! input and a rules snapshot into a [`PayrollResult`]. It is a pure function:
//! no I/O, no shared state, and no allocation once the input has validated.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CompensationInput, PayrollResult, RulesSnapshot};

use super::gross_pay::calculate_gross_pay;
use super::levies::{calculate_ahl, calculate_shif};
use super::money::round_money;
use super::nssf::calculate_nssf;
use super::paye::{calculate_paye, calculate_taxable_pay};

/// Computes gross pay, statutory deductions, PAYE and net pay.
///
/// The steps run in statutory order: gross pay, NSSF on basic salary, SHIF
/// and AHL on gross, taxable pay, the PAYE ladder, relief, and finally the
/// totals. Net pay is not clamped; a negative value is reported as-is.
///
/// # Errors
///
/// Returns `EngineError::Validation` if any monetary field of `input` is
/// negative. Nothing is computed in that case.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{CompensationInput, RulesSnapshot};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CompensationInput::new(Decimal::new(50_000, 0))
///     .with_allowance("house", Decimal::new(10_000, 0))
///     .with_voluntary_deduction("sacco", Decimal::new(1_000, 0));
///
/// let result = compute_payroll(&input, &RulesSnapshot::kenya_2025()).unwrap();
///
/// assert_eq!(result.gross_pay, Decimal::new(60_000, 0));
/// assert_eq!(result.nssf_employee, Decimal::new(3_000, 0));
/// assert_eq!(result.paye_net, Decimal::from_str("9483.35").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("43966.65").unwrap());
/// ```
pub fn compute_payroll(
    input: &CompensationInput,
    rules: &RulesSnapshot,
) -> EngineResult<PayrollResult> {
    input.validate()?;

    let gross_pay = calculate_gross_pay(input);
    let nssf = calculate_nssf(input.basic_salary, rules);
    let shif = calculate_shif(gross_pay, rules);
    let ahl = calculate_ahl(gross_pay, rules);

    let taxable_pay = calculate_taxable_pay(
        gross_pay,
        nssf.employee,
        shif.employee,
        ahl.employee,
        rules.tax_base_policy(),
    );
    let paye = calculate_paye(taxable_pay, rules);

    let helb = round_money(input.helb_amount);
    let voluntary_deductions_total = round_money(input.voluntary_deductions_total());

    let total_deductions = paye.net_tax
        + nssf.employee
        + shif.employee
        + ahl.employee
        + helb
        + voluntary_deductions_total;
    let employer_contributions = nssf.employer + shif.employer + ahl.employer;

    let result = PayrollResult {
        gross_pay,
        taxable_pay,
        paye_gross: paye.gross_tax,
        personal_relief_applied: paye.relief_applied,
        paye_net: paye.net_tax,
        nssf_employee: nssf.employee,
        nssf_employer: nssf.employer,
        shif_employee: shif.employee,
        shif_employer: shif.employer,
        ahl_employee: ahl.employee,
        ahl_employer: ahl.employer,
        helb,
        voluntary_deductions_total,
        total_deductions,
        net_pay: gross_pay - total_deductions,
        employer_contributions,
        employer_cost: gross_pay + employer_contributions,
    };

    debug!(
        rules_version = rules.version(),
        gross_pay = %result.gross_pay,
        paye_net = %result.paye_net,
        net_pay = %result.net_pay,
        "Payroll computed"
    );
    if result.net_pay < Decimal::ZERO {
        debug!(net_pay = %result.net_pay, "Deductions exceed gross pay");
    }

    Ok(result)
}
