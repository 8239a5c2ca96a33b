//! Compensation input model.
//!
//! This module defines [`CompensationInput`], the per-computation description
//! of what an employee is paid and what is withheld beyond statutory items.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An employee's compensation for one payroll month.
///
/// All amounts are monthly money values. Named allowances and voluntary
/// deductions are kept in ordered maps so that iteration (and therefore any
/// audit output) is deterministic.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::new(50_000, 0))
///     .with_allowance("house", Decimal::new(10_000, 0))
///     .with_voluntary_deduction("sacco", Decimal::new(1_000, 0));
///
/// assert!(input.validate().is_ok());
/// assert_eq!(input.allowances_total(), Decimal::new(10_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Monthly basic salary. This is the only pensionable component.
    pub basic_salary: Decimal,
    /// Named allowances, all added to gross pay.
    #[serde(default)]
    pub allowances: BTreeMap<String, Decimal>,
    /// Bonuses paid this month.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime paid this month.
    #[serde(default)]
    pub overtime: Decimal,
    /// Fixed monthly HELB student-loan deduction.
    #[serde(default)]
    pub helb_amount: Decimal,
    /// Named voluntary deductions, subtracted after tax.
    #[serde(default)]
    pub voluntary_deductions: BTreeMap<String, Decimal>,
}

impl CompensationInput {
    /// Creates an input with the given basic salary and nothing else.
    pub fn new(basic_salary: Decimal) -> Self {
        Self {
            basic_salary,
            ..Default::default()
        }
    }

    /// Adds (or replaces) a named allowance.
    pub fn with_allowance(mut self, name: impl Into<String>, amount: Decimal) -> Self {
        self.allowances.insert(name.into(), amount);
        self
    }

    /// Sets the bonus amount.
    pub fn with_bonuses(mut self, amount: Decimal) -> Self {
        self.bonuses = amount;
        self
    }

    /// Sets the overtime amount.
    pub fn with_overtime(mut self, amount: Decimal) -> Self {
        self.overtime = amount;
        self
    }

    /// Sets the HELB deduction.
    pub fn with_helb(mut self, amount: Decimal) -> Self {
        self.helb_amount = amount;
        self
    }

    /// Adds (or replaces) a named voluntary deduction.
    pub fn with_voluntary_deduction(mut self, name: impl Into<String>, amount: Decimal) -> Self {
        self.voluntary_deductions.insert(name.into(), amount);
        self
    }

    /// Sum of all allowances.
    pub fn allowances_total(&self) -> Decimal {
        self.allowances
            .values()
            .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
    }

    /// Sum of all voluntary deductions.
    pub fn voluntary_deductions_total(&self) -> Decimal {
        self.voluntary_deductions
            .values()
            .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
    }

    /// Rejects any negative or out-of-range monetary field.
    ///
    /// Negative inputs are never clamped; the first offending field is
    /// reported, with map entries named as `allowances.<name>` or
    /// `voluntary_deductions.<name>`. Every amount, and the gross and
    /// withheld totals, must be at most [`MAX_AMOUNT`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount("basic_salary", self.basic_salary)?;
        for (name, amount) in &self.allowances {
            check_amount(&format!("allowances.{name}"), *amount)?;
        }
        check_amount("bonuses", self.bonuses)?;
        check_amount("overtime", self.overtime)?;
        check_amount("helb_amount", self.helb_amount)?;
        for (name, amount) in &self.voluntary_deductions {
            check_amount(&format!("voluntary_deductions.{name}"), *amount)?;
        }

        let earnings = [self.basic_salary, self.bonuses, self.overtime]
            .into_iter()
            .chain(self.allowances.values().copied());
        check_total("gross_pay", earnings)?;

        let withheld =
            std::iter::once(self.helb_amount).chain(self.voluntary_deductions.values().copied());
        check_total("deductions", withheld)
    }
}

/// Largest accepted monetary amount: one quadrillion.
///
/// Applies to each field and to the gross and withheld totals, which keeps
/// every later sum and product well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

fn check_amount(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountOutOfRange {
            field: field.to_string(),
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

fn check_total(
    field: &str,
    mut amounts: impl Iterator<Item = Decimal>,
) -> Result<(), ValidationError> {
    let total = amounts.try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount));
    match total {
        Some(total) if total <= MAX_AMOUNT => Ok(()),
        _ => Err(ValidationError::AmountOutOfRange {
            field: field.to_string(),
            max: MAX_AMOUNT,
        }),
    }
}
