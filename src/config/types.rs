//! Configuration types for rules snapshots.
//!
//! This module contains the raw, unvalidated shape of a rules snapshot as it
//! is stored in YAML. Converting it into a
//! [`RulesSnapshot`](crate::models::RulesSnapshot) is where validation happens.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayeBracket, TaxBasePolicy};

/// A rules snapshot exactly as stored, before validation.
///
/// All rates are fractions (`0.06`, not `6`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Human-readable label for the snapshot (e.g., "2025-07").
    #[serde(default)]
    pub version: String,
    /// Flat monthly PAYE credit.
    pub personal_relief: Decimal,
    /// Employee NSSF rate applied to pensionable pay.
    pub nssf_employee_rate: Decimal,
    /// Employer NSSF rate applied to pensionable pay.
    pub nssf_employer_rate: Decimal,
    /// Maximum NSSF contribution per side.
    pub nssf_max_contribution: Decimal,
    /// Employee SHIF rate applied to gross pay.
    pub shif_employee_rate: Decimal,
    /// Employer SHIF rate applied to gross pay.
    pub shif_employer_rate: Decimal,
    /// Employee AHL rate applied to gross pay.
    pub ahl_employee_rate: Decimal,
    /// Employer AHL rate applied to gross pay.
    pub ahl_employer_rate: Decimal,
    /// Which statutory contributions reduce taxable pay.
    #[serde(default)]
    pub tax_base_policy: TaxBasePolicy,
    /// The progressive PAYE schedule, ascending by `min`.
    pub paye_brackets: Vec<PayeBracket>,
    /// First date the snapshot applies to.
    pub effective_from: NaiveDate,
    /// Last date the snapshot applies to, if retired.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    /// Whether the owning store marks this snapshot as the active one.
    #[serde(default)]
    pub is_active: bool,
}
