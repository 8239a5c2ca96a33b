//! PAYE calculation.
//!
//! This module determines taxable pay, evaluates it against the progressive
//! bracket ladder, and applies personal relief.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayeBracket, PayeSchedule, RulesSnapshot, TaxBasePolicy};

use super::money::round_money;

/// The part of taxable pay that falls inside one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPortion {
    /// Position of the bracket in the schedule.
    pub index: usize,
    /// The bracket itself.
    pub bracket: PayeBracket,
    /// Taxable pay inside the bracket.
    pub amount: Decimal,
    /// `amount × rate`, unrounded.
    pub tax: Decimal,
}

/// The outcome of the PAYE step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeResult {
    /// The base the ladder was evaluated on.
    pub taxable_pay: Decimal,
    /// Ladder tax before relief.
    pub gross_tax: Decimal,
    /// Relief actually used; never more than `gross_tax`.
    pub relief_applied: Decimal,
    /// Tax after relief.
    pub net_tax: Decimal,
}

/// Taxable pay after pre-tax contributions, floored at zero.
///
/// Under [`TaxBasePolicy::NssfOnly`] only NSSF is deducted; under
/// [`TaxBasePolicy::NssfShifAhl`] the employee SHIF and AHL shares are too.
pub fn calculate_taxable_pay(
    gross_pay: Decimal,
    nssf_employee: Decimal,
    shif_employee: Decimal,
    ahl_employee: Decimal,
    policy: TaxBasePolicy,
) -> Decimal {
    let pre_tax = match policy {
        TaxBasePolicy::NssfOnly => nssf_employee,
        TaxBasePolicy::NssfShifAhl => nssf_employee + shif_employee + ahl_employee,
    };
    (gross_pay - pre_tax).max(Decimal::ZERO)
}

/// Splits taxable pay across the brackets it reaches.
///
/// Stops at the first bracket whose `min` is not below `taxable_pay`, so an
/// amount exactly equal to a bracket's `max` stays entirely in that bracket.
pub fn bracket_portions(
    taxable_pay: Decimal,
    schedule: &PayeSchedule,
) -> impl Iterator<Item = BracketPortion> + '_ {
    schedule
        .brackets()
        .iter()
        .enumerate()
        .take_while(move |(_, bracket)| taxable_pay > bracket.min)
        .map(move |(index, bracket)| {
            let upper = bracket.max.map_or(taxable_pay, |max| taxable_pay.min(max));
            let amount = upper - bracket.min;
            BracketPortion {
                index,
                bracket: *bracket,
                amount,
                tax: amount * bracket.rate,
            }
        })
}

/// Tax from the bracket ladder, rounded once after summing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_graduated_tax;
/// use payroll_engine::models::RulesSnapshot;
/// use rust_decimal::Decimal;
///
/// let rules = RulesSnapshot::kenya_2025();
/// // 24,000 × 10% = 2,400
/// let tax = calculate_graduated_tax(Decimal::new(24_000, 0), rules.paye_schedule());
/// assert_eq!(tax, Decimal::new(2_400, 0));
/// ```
pub fn calculate_graduated_tax(taxable_pay: Decimal, schedule: &PayeSchedule) -> Decimal {
    round_money(bracket_portions(taxable_pay, schedule).map(|p| p.tax).sum())
}

/// Evaluates the ladder on `taxable_pay` and applies personal relief.
///
/// Relief never drives tax below zero and any unused part is forfeited.
pub fn calculate_paye(taxable_pay: Decimal, rules: &RulesSnapshot) -> PayeResult {
    let gross_tax = calculate_graduated_tax(taxable_pay, rules.paye_schedule());
    let relief_applied = rules.personal_relief().min(gross_tax);

    PayeResult {
        taxable_pay,
        gross_tax,
        relief_applied,
        net_tax: gross_tax - relief_applied,
    }
}
