//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] breakdown produced by the
//! calculator and the [`AuditStep`] records used to explain it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete net-pay breakdown for one employee and one month.
///
/// Every line item is rounded to the nearest cent when it is finalized.
/// `net_pay` is `gross_pay - total_deductions` and is reported as-is, even
/// when negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{CompensationInput, RulesSnapshot};
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::new(24_000, 0));
/// let result = compute_payroll(&input, &RulesSnapshot::kenya_2025()).unwrap();
///
/// assert_eq!(result.gross_pay, Decimal::new(24_000, 0));
/// assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Basic salary plus allowances, bonuses and overtime.
    pub gross_pay: Decimal,
    /// The PAYE base after pre-tax contributions.
    pub taxable_pay: Decimal,
    /// Tax from the bracket ladder, before relief.
    pub paye_gross: Decimal,
    /// The part of personal relief actually used.
    pub personal_relief_applied: Decimal,
    /// Tax withheld after relief; never negative.
    pub paye_net: Decimal,
    /// Employee NSSF contribution.
    pub nssf_employee: Decimal,
    /// Employer NSSF contribution.
    pub nssf_employer: Decimal,
    /// Employee SHIF contribution.
    pub shif_employee: Decimal,
    /// Employer SHIF contribution.
    pub shif_employer: Decimal,
    /// Employee AHL contribution.
    pub ahl_employee: Decimal,
    /// Employer AHL contribution.
    pub ahl_employer: Decimal,
    /// HELB loan repayment withheld.
    pub helb: Decimal,
    /// Sum of voluntary deductions withheld.
    pub voluntary_deductions_total: Decimal,
    /// PAYE, employee statutory contributions, HELB and voluntary deductions.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions.
    pub net_pay: Decimal,
    /// Employer NSSF, SHIF and AHL.
    pub employer_contributions: Decimal,
    /// Gross pay plus employer contributions.
    pub employer_cost: Decimal,
}

impl PayrollResult {
    /// Returns true if deductions exceed gross pay.
    pub fn is_net_negative(&self) -> bool {
        self.net_pay < Decimal::ZERO
    }
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
