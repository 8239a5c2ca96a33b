//! Tax and deduction calculation for the Payroll Engine.
//!
//! This module contains the calculation functions that turn a compensation
//! input and a rules snapshot into a net-pay breakdown: gross pay, NSSF on
//! pensionable pay, SHIF and AHL levies on gross pay, the progressive PAYE
//! ladder with personal relief, and the audit trail explaining each step.

mod explain;
mod gross_pay;
mod levies;
mod money;
mod nssf;
mod paye;
mod payroll;

pub use explain::explain_payroll;
pub use gross_pay::calculate_gross_pay;
pub use levies::{LevyContribution, calculate_ahl, calculate_shif};
pub use money::{MONEY_DECIMAL_PLACES, round_money};
pub use nssf::{NssfContribution, calculate_nssf};
pub use paye::{
    BracketPortion, PayeResult, bracket_portions, calculate_graduated_tax, calculate_paye,
    calculate_taxable_pay,
};
pub use payroll::compute_payroll;
