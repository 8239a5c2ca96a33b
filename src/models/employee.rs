//! Employee identifier model.
//!
//! Employee records live in the surrounding application. The engine only
//! needs to recognise their identifiers, which take the form `EMP` followed
//! by a zero-padded ordinal (for example `EMP001` or `EMP1042`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The literal prefix of every employee identifier.
pub const EMPLOYEE_ID_PREFIX: &str = "EMP";

/// Minimum number of digits after the prefix; shorter ordinals are zero-padded.
pub const EMPLOYEE_ID_MIN_DIGITS: usize = 3;

/// An opaque employee identifier of the form `EMP` + zero-padded ordinal.
///
/// Ordinals are allocated by a sequence outside this engine; this type only
/// formats and validates them.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::EmployeeId;
///
/// let id = EmployeeId::from_ordinal(7);
/// assert_eq!(id.as_str(), "EMP007");
/// assert_eq!(id.ordinal(), 7);
///
/// let parsed: EmployeeId = "EMP1042".parse().unwrap();
/// assert_eq!(parsed.ordinal(), 1042);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Formats an identifier from a sequence ordinal.
    pub fn from_ordinal(ordinal: u32) -> Self {
        Self(format!(
            "{EMPLOYEE_ID_PREFIX}{ordinal:0width$}",
            width = EMPLOYEE_ID_MIN_DIGITS
        ))
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric ordinal encoded in the identifier.
    pub fn ordinal(&self) -> u32 {
        // Digits were checked when the identifier was built.
        self.0[EMPLOYEE_ID_PREFIX.len()..].parse().unwrap_or_default()
    }
}

impl FromStr for EmployeeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ValidationError::InvalidEmployeeId {
            id: s.to_string(),
            message: message.to_string(),
        };

        let digits = s
            .strip_prefix(EMPLOYEE_ID_PREFIX)
            .ok_or_else(|| invalid("must start with 'EMP'"))?;

        if digits.len() < EMPLOYEE_ID_MIN_DIGITS {
            return Err(invalid("ordinal must have at least 3 digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("ordinal must contain only digits"));
        }
        // Longer ordinals are only valid when the padding has been outgrown.
        if digits.len() > EMPLOYEE_ID_MIN_DIGITS && digits.starts_with('0') {
            return Err(invalid("ordinal has excess zero padding"));
        }
        if digits.parse::<u32>().is_err() {
            return Err(invalid("ordinal is out of range"));
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
