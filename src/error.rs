//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs,
//! loading a rules snapshot, or computing statutory deadlines.

use rust_decimal::Decimal;
use thiserror::Error;

/// A rejected input or rules snapshot.
///
/// Validation happens before any computation starts, so a caller that
/// receives one of these never observes a partially computed result.
///
/// # Example
///
/// ```
/// use payroll_engine::error::ValidationError;
/// use rust_decimal::Decimal;
///
/// let error = ValidationError::NegativeAmount {
///     field: "basic_salary".to_string(),
///     value: Decimal::new(-100, 0),
/// };
/// assert_eq!(error.to_string(), "Field 'basic_salary' must not be negative (got -100)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A monetary field held a negative amount.
    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeAmount {
        /// The offending field, with map keys as `map.key`.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A monetary field, or a total of them, exceeded the accepted maximum.
    #[error("Field '{field}' exceeds the maximum amount of {max}")]
    AmountOutOfRange {
        /// The offending field, or `gross_pay` / `deductions` for a total.
        field: String,
        /// The largest accepted amount.
        max: Decimal,
    },

    /// A rate was outside the closed interval `[0, 1]`.
    #[error("Rate '{field}' must be a fraction between 0 and 1 (got {value})")]
    RateOutOfRange {
        /// The offending rate field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// The rules snapshot is structurally malformed.
    #[error("Invalid rules snapshot: {message}")]
    InvalidRules {
        /// A description of the problem.
        message: String,
    },

    /// The PAYE bracket table has a gap, an overlap, or no unbounded top bracket.
    ///
    /// `previous` and `next` name the two adjacent brackets involved. When the
    /// problem sits at an end of the table (the first bracket does not start
    /// at zero, or the last one is bounded) both hold the index of that one
    /// bracket.
    #[error("PAYE bracket table is not contiguous between brackets {previous} and {next}: {message}")]
    ConfigurationGap {
        /// Index of the lower offending bracket.
        previous: usize,
        /// Index of the upper offending bracket; equal to `previous` at a table end.
        next: usize,
        /// A description of the gap or overlap.
        message: String,
    },

    /// An employee identifier did not match `EMP` + zero-padded ordinal.
    #[error("Invalid employee id '{id}': {message}")]
    InvalidEmployeeId {
        /// The rejected identifier.
        id: String,
        /// Why it was rejected.
        message: String,
    },
}

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Compensation input or rules snapshot failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A remittance period string was not of the form `YYYY-MM`.
    #[error("Invalid remittance period '{period}': {message}")]
    InvalidPeriod {
        /// The rejected period text.
        period: String,
        /// Why it was rejected.
        message: String,
    },

    /// A tax year whose filing deadline cannot be represented.
    #[error("Invalid tax year: {year}")]
    InvalidTaxYear {
        /// The rejected year.
        year: i32,
    },
}

impl EngineError {
    /// Returns true if this error is a rejected input or rules snapshot.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_displays_field_and_value() {
        let error = ValidationError::NegativeAmount {
            field: "allowances.house".to_string(),
            value: Decimal::new(-5000, 2),
        };
        assert_eq!(
            error.to_string(),
            "Field 'allowances.house' must not be negative (got -50.00)"
        );
    }

    #[test]
    fn test_configuration_gap_displays_indices() {
        let error = ValidationError::ConfigurationGap {
            previous: 1,
            next: 2,
            message: "gap from 32333 to 40000".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "PAYE bracket table is not contiguous between brackets 1 and 2: gap from 32333 to 40000"
        );
    }

    #[test]
    fn test_amount_out_of_range_displays_field_and_limit() {
        let error = ValidationError::AmountOutOfRange {
            field: "bonuses".to_string(),
            max: Decimal::new(1_000_000_000_000_000, 0),
        };
        assert_eq!(
            error.to_string(),
            "Field 'bonuses' exceeds the maximum amount of 1000000000000000"
        );
    }

    #[test]
    fn test_validation_error_is_transparent_through_engine_error() {
        let error: EngineError = ValidationError::InvalidRules {
            message: "no PAYE brackets".to_string(),
        }
        .into();
        assert!(error.is_validation());
        assert_eq!(error.to_string(), "Invalid rules snapshot: no PAYE brackets");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
        assert!(!error.is_validation());
    }

    #[test]
    fn test_invalid_period_displays_period() {
        let error = EngineError::InvalidPeriod {
            period: "2025-13".to_string(),
            message: "month must be between 01 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid remittance period '2025-13': month must be between 01 and 12"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<ValidationError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn rejects() -> Result<(), ValidationError> {
            Err(ValidationError::InvalidRules {
                message: "test".to_string(),
            })
        }

        fn propagates() -> EngineResult<()> {
            rejects()?;
            Ok(())
        }

        assert!(matches!(propagates(), Err(EngineError::Validation(_))));
    }
}
