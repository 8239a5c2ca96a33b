//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::models::CompensationInput;

use super::money::round_money;

/// Gross pay: basic salary plus every allowance, bonuses and overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::new(50_000, 0))
///     .with_allowance("house", Decimal::new(10_000, 0))
///     .with_bonuses(Decimal::new(2_500, 0));
///
/// assert_eq!(calculate_gross_pay(&input), Decimal::new(62_500, 0));
/// ```
pub fn calculate_gross_pay(input: &CompensationInput) -> Decimal {
    round_money(input.basic_salary + input.allowances_total() + input.bonuses + input.overtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// GP-001: basic salary only
    #[test]
    fn test_gp_001_basic_only() {
        let input = CompensationInput::new(dec("45000"));
        assert_eq!(calculate_gross_pay(&input), dec("45000"));
    }

    /// GP-002: every component contributes
    #[test]
    fn test_gp_002_all_components() {
        let input = CompensationInput::new(dec("40000"))
            .with_allowance("house", dec("8000"))
            .with_allowance("commuter", dec("3000.50"))
            .with_bonuses(dec("5000"))
            .with_overtime(dec("1250.25"));

        assert_eq!(calculate_gross_pay(&input), dec("57250.75"));
    }

    /// GP-003: deductions never touch gross
    #[test]
    fn test_gp_003_deductions_excluded() {
        let input = CompensationInput::new(dec("40000"))
            .with_helb(dec("2000"))
            .with_voluntary_deduction("sacco", dec("3000"));

        assert_eq!(calculate_gross_pay(&input), dec("40000"));
    }

    #[test]
    fn test_zero_income() {
        assert_eq!(
            calculate_gross_pay(&CompensationInput::default()),
            Decimal::ZERO
        );
    }
}
