//! SHIF and AHL levy calculation.
//!
//! Both levies are flat rates on gross pay with no cap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RulesSnapshot;

use super::money::round_money;

/// Employee and employer shares of a gross-pay levy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyContribution {
    /// Employee share.
    pub employee: Decimal,
    /// Employer share.
    pub employer: Decimal,
}

impl LevyContribution {
    fn on(gross_pay: Decimal, employee_rate: Decimal, employer_rate: Decimal) -> Self {
        Self {
            employee: round_money(gross_pay * employee_rate),
            employer: round_money(gross_pay * employer_rate),
        }
    }
}

/// Social Health Insurance Fund contributions on gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_shif;
/// use payroll_engine::models::RulesSnapshot;
/// use rust_decimal::Decimal;
///
/// let shif = calculate_shif(Decimal::new(60_000, 0), &RulesSnapshot::kenya_2025());
/// assert_eq!(shif.employee, Decimal::new(1_650, 0));
/// ```
pub fn calculate_shif(gross_pay: Decimal, rules: &RulesSnapshot) -> LevyContribution {
    LevyContribution::on(
        gross_pay,
        rules.shif_employee_rate(),
        rules.shif_employer_rate(),
    )
}

/// Affordable Housing Levy contributions on gross pay.
pub fn calculate_ahl(gross_pay: Decimal, rules: &RulesSnapshot) -> LevyContribution {
    LevyContribution::on(
        gross_pay,
        rules.ahl_employee_rate(),
        rules.ahl_employer_rate(),
    )
}
