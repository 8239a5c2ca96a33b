//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structure for the `/payroll/preview`
//! endpoint.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationInput, EmployeeId};

/// Request body for the `/payroll/preview` endpoint.
///
/// Carries one employee's compensation for the month. The rules snapshot is
/// not part of the request; the server evaluates against the snapshot it was
/// started with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPreviewRequest {
    /// Optional identifier echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Named allowances.
    #[serde(default)]
    pub allowances: BTreeMap<String, Decimal>,
    /// Bonuses paid this month.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime paid this month.
    #[serde(default)]
    pub overtime: Decimal,
    /// HELB loan repayment.
    #[serde(default)]
    pub helb_amount: Decimal,
    /// Named voluntary deductions.
    #[serde(default)]
    pub voluntary_deductions: BTreeMap<String, Decimal>,
}

impl From<PayrollPreviewRequest> for CompensationInput {
    fn from(req: PayrollPreviewRequest) -> Self {
        CompensationInput {
            basic_salary: req.basic_salary,
            allowances: req.allowances,
            bonuses: req.bonuses,
            overtime: req.overtime,
            helb_amount: req.helb_amount,
            voluntary_deductions: req.voluntary_deductions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preview_request() {
        let json = r#"{
            "employee_id": "EMP007",
            "basic_salary": "50000",
            "allowances": {"house": "10000"},
            "voluntary_deductions": {"sacco": "1000"}
        }"#;

        let request: PayrollPreviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, Some(EmployeeId::from_ordinal(7)));
        assert_eq!(request.basic_salary, Decimal::new(50_000, 0));
        assert_eq!(request.bonuses, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_employee_id_rejected() {
        let json = r#"{"employee_id": "emp_001", "basic_salary": "50000"}"#;
        assert!(serde_json::from_str::<PayrollPreviewRequest>(json).is_err());
    }

    #[test]
    fn test_conversion_to_compensation_input() {
        let request = PayrollPreviewRequest {
            employee_id: None,
            basic_salary: Decimal::new(40_000, 0),
            allowances: BTreeMap::from([("house".to_string(), Decimal::new(5_000, 0))]),
            bonuses: Decimal::ZERO,
            overtime: Decimal::new(1_200, 0),
            helb_amount: Decimal::new(1_500, 0),
            voluntary_deductions: BTreeMap::new(),
        };

        let input: CompensationInput = request.into();
        assert_eq!(input.allowances_total(), Decimal::new(5_000, 0));
        assert_eq!(input.overtime, Decimal::new(1_200, 0));
        assert_eq!(input.helb_amount, Decimal::new(1_500, 0));
    }
}
