//! Statutory rules snapshot model.
//!
//! A [`RulesSnapshot`] is the immutable, validated set of statutory rates and
//! PAYE brackets that a payroll computation is evaluated against. It can only
//! be obtained through validation, so the calculator never has to re-check it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::error::ValidationError;

/// Whether SHIF and AHL employee contributions reduce taxable pay.
///
/// NSSF is always deducted before tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxBasePolicy {
    /// Taxable pay is gross pay less the employee NSSF contribution.
    #[default]
    NssfOnly,
    /// Taxable pay is gross pay less employee NSSF, SHIF and AHL.
    NssfShifAhl,
}

/// One band of the PAYE schedule.
///
/// The band covers `[min, max]`; a `max` of `None` means unbounded.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayeBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = PayeBracket::new(Decimal::ZERO, Some(Decimal::new(24_000, 0)), Decimal::new(10, 2));
/// assert!(!bracket.is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeBracket {
    /// Lower edge of the band.
    pub min: Decimal,
    /// Upper edge of the band, or `None` for the top band.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
}

impl PayeBracket {
    /// Creates a bracket.
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }

    /// Returns true for the open-ended top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// A validated PAYE schedule.
///
/// Brackets are ascending, start at zero, meet exactly end-to-start, and end
/// with exactly one unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PayeSchedule(Vec<PayeBracket>);

impl PayeSchedule {
    /// Validates a bracket table.
    ///
    /// # Errors
    ///
    /// - `InvalidRules` for an empty table or a bracket whose `max` is not above its `min`
    /// - `RateOutOfRange` / `NegativeAmount` for bad per-bracket values
    /// - `ConfigurationGap` for a gap or overlap between two brackets, or (with
    ///   `previous == next` naming the bracket) a first bracket not starting at
    ///   zero or a last bracket that is not unbounded
    pub fn new(brackets: Vec<PayeBracket>) -> Result<Self, ValidationError> {
        let Some(first) = brackets.first() else {
            return Err(ValidationError::InvalidRules {
                message: "PAYE bracket table is empty".to_string(),
            });
        };

        for (index, bracket) in brackets.iter().enumerate() {
            check_amount(&format!("paye_brackets[{index}].min"), bracket.min)?;
            check_rate(&format!("paye_brackets[{index}].rate"), bracket.rate)?;
            if let Some(max) = bracket.max {
                if max <= bracket.min {
                    return Err(ValidationError::InvalidRules {
                        message: format!(
                            "PAYE bracket {index} has max {max} not above its min {}",
                            bracket.min
                        ),
                    });
                }
            }
        }

        if !first.min.is_zero() {
            return Err(ValidationError::ConfigurationGap {
                previous: 0,
                next: 0,
                message: format!(
                    "gap before bracket 0: table starts at {} instead of 0",
                    first.min
                ),
            });
        }

        for (next, pair) in brackets.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let previous = next - 1;
            let (lower, upper) = (&pair[0], &pair[1]);
            match lower.max {
                None => {
                    return Err(ValidationError::ConfigurationGap {
                        previous,
                        next,
                        message: format!(
                            "bracket {previous} is unbounded but is followed by bracket {next}"
                        ),
                    });
                }
                Some(max) if upper.min > max => {
                    return Err(ValidationError::ConfigurationGap {
                        previous,
                        next,
                        message: format!("gap from {max} to {}", upper.min),
                    });
                }
                Some(max) if upper.min < max => {
                    return Err(ValidationError::ConfigurationGap {
                        previous,
                        next,
                        message: format!("overlap from {} to {max}", upper.min),
                    });
                }
                Some(_) => {}
            }
        }

        let last = brackets.len() - 1;
        if let Some(max) = brackets[last].max {
            return Err(ValidationError::ConfigurationGap {
                previous: last,
                next: last,
                message: format!(
                    "no unbounded bracket after bracket {last}, which ends at {max}"
                ),
            });
        }

        Ok(Self(brackets))
    }

    /// The brackets, ascending.
    pub fn brackets(&self) -> &[PayeBracket] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PayeSchedule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let brackets = Vec::<PayeBracket>::deserialize(deserializer)?;
        PayeSchedule::new(brackets).map_err(serde::de::Error::custom)
    }
}

/// A validated, immutable statutory rules snapshot.
///
/// Construct one with [`RulesSnapshot::new`] from a [`RulesConfig`], by
/// deserializing (which runs the same validation), or with
/// [`RulesSnapshot::kenya_2025`]. Deciding which snapshot is current belongs
/// to whoever stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RulesConfig", into = "RulesConfig")]
pub struct RulesSnapshot {
    version: String,
    personal_relief: Decimal,
    nssf_employee_rate: Decimal,
    nssf_employer_rate: Decimal,
    nssf_max_contribution: Decimal,
    shif_employee_rate: Decimal,
    shif_employer_rate: Decimal,
    ahl_employee_rate: Decimal,
    ahl_employer_rate: Decimal,
    tax_base_policy: TaxBasePolicy,
    paye_schedule: PayeSchedule,
    effective_from: NaiveDate,
    effective_to: Option<NaiveDate>,
    is_active: bool,
}

impl RulesSnapshot {
    /// Validates a raw snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any rate is outside `[0, 1]`, the
    /// relief or NSSF cap is negative, the lifecycle dates are reversed, or the
    /// PAYE bracket table is not a contiguous partition of `[0, ∞)`.
    pub fn new(config: RulesConfig) -> Result<Self, ValidationError> {
        check_amount("personal_relief", config.personal_relief)?;
        check_amount("nssf_max_contribution", config.nssf_max_contribution)?;
        check_rate("nssf_employee_rate", config.nssf_employee_rate)?;
        check_rate("nssf_employer_rate", config.nssf_employer_rate)?;
        check_rate("shif_employee_rate", config.shif_employee_rate)?;
        check_rate("shif_employer_rate", config.shif_employer_rate)?;
        check_rate("ahl_employee_rate", config.ahl_employee_rate)?;
        check_rate("ahl_employer_rate", config.ahl_employer_rate)?;

        if let Some(effective_to) = config.effective_to {
            if effective_to < config.effective_from {
                return Err(ValidationError::InvalidRules {
                    message: format!(
                        "effective_to {effective_to} is before effective_from {}",
                        config.effective_from
                    ),
                });
            }
        }

        let paye_schedule = PayeSchedule::new(config.paye_brackets)?;

        Ok(Self {
            version: config.version,
            personal_relief: config.personal_relief,
            nssf_employee_rate: config.nssf_employee_rate,
            nssf_employer_rate: config.nssf_employer_rate,
            nssf_max_contribution: config.nssf_max_contribution,
            shif_employee_rate: config.shif_employee_rate,
            shif_employer_rate: config.shif_employer_rate,
            ahl_employee_rate: config.ahl_employee_rate,
            ahl_employer_rate: config.ahl_employer_rate,
            tax_base_policy: config.tax_base_policy,
            paye_schedule,
            effective_from: config.effective_from,
            effective_to: config.effective_to,
            is_active: config.is_active,
        })
    }

    /// The monthly Kenyan statutory schedule in force from July 2025.
    ///
    /// Matches `config/rules/kenya_2025.yaml`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::RulesSnapshot;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = RulesSnapshot::kenya_2025();
    /// assert_eq!(rules.personal_relief(), Decimal::new(2400, 0));
    /// assert_eq!(rules.paye_schedule().brackets().len(), 5);
    /// ```
    pub fn kenya_2025() -> Self {
        let bracket = |min: i64, max: Option<i64>, rate: Decimal| {
            PayeBracket::new(Decimal::new(min, 0), max.map(|m| Decimal::new(m, 0)), rate)
        };

        Self {
            version: "KE-2025-07".to_string(),
            personal_relief: Decimal::new(2400, 0),
            nssf_employee_rate: Decimal::new(6, 2),
            nssf_employer_rate: Decimal::new(6, 2),
            nssf_max_contribution: Decimal::new(4320, 0),
            shif_employee_rate: Decimal::new(275, 4),
            shif_employer_rate: Decimal::ZERO,
            ahl_employee_rate: Decimal::new(15, 3),
            ahl_employer_rate: Decimal::new(15, 3),
            tax_base_policy: TaxBasePolicy::NssfOnly,
            paye_schedule: PayeSchedule(vec![
                bracket(0, Some(24_000), Decimal::new(10, 2)),
                bracket(24_000, Some(32_333), Decimal::new(25, 2)),
                bracket(32_333, Some(500_000), Decimal::new(30, 2)),
                bracket(500_000, Some(800_000), Decimal::new(325, 3)),
                bracket(800_000, None, Decimal::new(35, 2)),
            ]),
            effective_from: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
            effective_to: None,
            is_active: true,
        }
    }

    /// Returns a copy using a different tax-base policy.
    pub fn with_tax_base_policy(mut self, policy: TaxBasePolicy) -> Self {
        self.tax_base_policy = policy;
        self
    }

    /// Snapshot label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Flat monthly PAYE credit.
    pub fn personal_relief(&self) -> Decimal {
        self.personal_relief
    }

    /// Employee NSSF rate.
    pub fn nssf_employee_rate(&self) -> Decimal {
        self.nssf_employee_rate
    }

    /// Employer NSSF rate.
    pub fn nssf_employer_rate(&self) -> Decimal {
        self.nssf_employer_rate
    }

    /// NSSF cap per side.
    pub fn nssf_max_contribution(&self) -> Decimal {
        self.nssf_max_contribution
    }

    /// Employee SHIF rate.
    pub fn shif_employee_rate(&self) -> Decimal {
        self.shif_employee_rate
    }

    /// Employer SHIF rate.
    pub fn shif_employer_rate(&self) -> Decimal {
        self.shif_employer_rate
    }

    /// Employee AHL rate.
    pub fn ahl_employee_rate(&self) -> Decimal {
        self.ahl_employee_rate
    }

    /// Employer AHL rate.
    pub fn ahl_employer_rate(&self) -> Decimal {
        self.ahl_employer_rate
    }

    /// Which contributions reduce taxable pay.
    pub fn tax_base_policy(&self) -> TaxBasePolicy {
        self.tax_base_policy
    }

    /// The validated PAYE schedule.
    pub fn paye_schedule(&self) -> &PayeSchedule {
        &self.paye_schedule
    }

    /// First date the snapshot applies to.
    pub fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }

    /// Last date the snapshot applies to, if retired.
    pub fn effective_to(&self) -> Option<NaiveDate> {
        self.effective_to
    }

    /// Whether the owning store flagged this snapshot as active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TryFrom<RulesConfig> for RulesSnapshot {
    type Error = ValidationError;

    fn try_from(config: RulesConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<RulesSnapshot> for RulesConfig {
    fn from(rules: RulesSnapshot) -> Self {
        RulesConfig {
            version: rules.version,
            personal_relief: rules.personal_relief,
            nssf_employee_rate: rules.nssf_employee_rate,
            nssf_employer_rate: rules.nssf_employer_rate,
            nssf_max_contribution: rules.nssf_max_contribution,
            shif_employee_rate: rules.shif_employee_rate,
            shif_employer_rate: rules.shif_employer_rate,
            ahl_employee_rate: rules.ahl_employee_rate,
            ahl_employer_rate: rules.ahl_employer_rate,
            tax_base_policy: rules.tax_base_policy,
            paye_brackets: rules.paye_schedule.0,
            effective_from: rules.effective_from,
            effective_to: rules.effective_to,
            is_active: rules.is_active,
        }
    }
}

fn check_rate(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ValidationError::RateOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_amount(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
