//! NSSF contribution calculation.
//!
//! NSSF is levied on pensionable pay, which is the basic salary alone.
//! Allowances, bonuses and overtime are not pensionable. Each side's
//! contribution is capped at the snapshot's maximum contribution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RulesSnapshot;

use super::money::round_money;

/// Employee and employer NSSF contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfContribution {
    /// The base the rates were applied to.
    pub pensionable_pay: Decimal,
    /// Employee contribution, after the cap.
    pub employee: Decimal,
    /// Employer contribution, after the cap.
    pub employer: Decimal,
    /// True if the employee contribution was limited by the cap.
    pub employee_capped: bool,
}

/// Calculates NSSF contributions for a basic salary.
///
/// `contribution = min(basic_salary × rate, cap)` for each side.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_nssf;
/// use payroll_engine::models::RulesSnapshot;
/// use rust_decimal::Decimal;
///
/// let rules = RulesSnapshot::kenya_2025();
///
/// let below_cap = calculate_nssf(Decimal::new(50_000, 0), &rules);
/// assert_eq!(below_cap.employee, Decimal::new(3_000, 0));
///
/// let above_cap = calculate_nssf(Decimal::new(100_000, 0), &rules);
/// assert_eq!(above_cap.employee, Decimal::new(4_320, 0));
/// assert!(above_cap.employee_capped);
/// ```
pub fn calculate_nssf(basic_salary: Decimal, rules: &RulesSnapshot) -> NssfContribution {
    let cap = rules.nssf_max_contribution();
    let employee_raw = basic_salary * rules.nssf_employee_rate();
    let employer_raw = basic_salary * rules.nssf_employer_rate();

    NssfContribution {
        pensionable_pay: basic_salary,
        employee: round_money(employee_raw.min(cap)),
        employer: round_money(employer_raw.min(cap)),
        employee_capped: employee_raw > cap,
    }
}
