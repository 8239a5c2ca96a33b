//! Compliance deadline models.
//!
//! This module contains the [`RemittancePeriod`] a monthly deadline is keyed
//! on, the statutory [`Obligation`]s, and the [`DueDateInfo`] urgency record
//! the scheduler produces.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A calendar month for which statutory remittances are made.
///
/// Parses from and displays as `YYYY-MM`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RemittancePeriod;
///
/// let period: RemittancePeriod = "2025-01".parse().unwrap();
/// assert_eq!(period.year(), 2025);
/// assert_eq!(period.month(), 1);
/// assert_eq!(period.to_string(), "2025-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RemittancePeriod {
    year: i32,
    month: u32,
}

impl RemittancePeriod {
    /// Creates a period, rejecting months outside 1..=12 and years
    /// outside 0..=9999.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month; December rolls into January of the next year.
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

impl FromStr for RemittancePeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| EngineError::InvalidPeriod {
            period: s.to_string(),
            message: message.to_string(),
        };

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected the form YYYY-MM"))?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid("expected the form YYYY-MM"));
        }

        let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;
        let month: u32 = month.parse().map_err(|_| invalid("month is not a number"))?;

        Self::new(year, month).ok_or_else(|| invalid("month must be between 01 and 12"))
    }
}

impl TryFrom<String> for RemittancePeriod {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RemittancePeriod> for String {
    fn from(period: RemittancePeriod) -> Self {
        period.to_string()
    }
}

impl fmt::Display for RemittancePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The two classes of statutory deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    /// PAYE/NSSF/SHIF/AHL, due on the 9th of the following month.
    MonthlyRemittance,
    /// P9/P10 annual returns, due on the last day of February after the tax year.
    AnnualReturn,
}

impl DeadlineKind {
    /// How many days ahead a deadline counts as due soon.
    pub fn due_soon_threshold_days(&self) -> i64 {
        match self {
            DeadlineKind::MonthlyRemittance => 7,
            DeadlineKind::AnnualReturn => 30,
        }
    }
}

/// A statutory filing or remittance tracked by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obligation {
    /// PAYE income tax remittance.
    Paye,
    /// NSSF pension contribution remittance.
    Nssf,
    /// SHIF health contribution remittance.
    Shif,
    /// Affordable Housing Levy remittance.
    Ahl,
    /// P9 employee tax deduction cards.
    P9,
    /// P10 employer annual return.
    P10,
}

impl Obligation {
    /// Obligations remitted every month.
    pub const MONTHLY: [Obligation; 4] = [
        Obligation::Paye,
        Obligation::Nssf,
        Obligation::Shif,
        Obligation::Ahl,
    ];

    /// Obligations filed once per tax year.
    pub const ANNUAL: [Obligation; 2] = [Obligation::P9, Obligation::P10];

    /// The deadline class this obligation belongs to.
    pub fn kind(&self) -> DeadlineKind {
        match self {
            Obligation::Paye | Obligation::Nssf | Obligation::Shif | Obligation::Ahl => {
                DeadlineKind::MonthlyRemittance
            }
            Obligation::P9 | Obligation::P10 => DeadlineKind::AnnualReturn,
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            Obligation::Paye => "PAYE",
            Obligation::Nssf => "NSSF",
            Obligation::Shif => "SHIF",
            Obligation::Ahl => "AHL",
            Obligation::P9 => "P9 Forms",
            Obligation::P10 => "P10 Return",
        }
    }
}

/// Where a deadline stands relative to a reference date.
///
/// `days_remaining` is signed: negative once the deadline has passed.
///
/// # Example
///
/// ```
/// use payroll_engine::compliance::monthly_due_date_on;
/// use payroll_engine::models::RemittancePeriod;
/// use chrono::NaiveDate;
///
/// let period: RemittancePeriod = "2025-01".parse().unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
/// let info = monthly_due_date_on(period, today);
///
/// assert_eq!(info.due_date, NaiveDate::from_ymd_opt(2025, 2, 9).unwrap());
/// assert_eq!(info.days_remaining, -6);
/// assert!(info.is_overdue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateInfo {
    /// The deadline class.
    pub kind: DeadlineKind,
    /// The statutory due date.
    pub due_date: NaiveDate,
    /// Whole days from the reference date to the due date.
    pub days_remaining: i64,
    /// True once the due date has passed.
    pub is_overdue: bool,
    /// True when the due date is within the class threshold and not passed.
    pub is_due_soon: bool,
}

/// A dated obligation for a specific period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationDue {
    /// What has to be filed or remitted.
    pub obligation: Obligation,
    /// Display name of the obligation, e.g. "P10 Return".
    pub label: String,
    /// The period label, `YYYY-MM` or a tax year.
    pub period: String,
    /// Deadline and urgency.
    pub due: DueDateInfo,
    /// Human-readable status line.
    pub status: String,
}
