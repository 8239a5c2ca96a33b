//! Per-obligation deadlines.
//!
//! Expands a remittance period or tax year into the individual statutory
//! obligations that fall due for it.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Obligation, ObligationDue, RemittancePeriod};

use super::deadlines::{annual_due_date_on, monthly_due_date_on};

/// PAYE, NSSF, SHIF and AHL remittances for `period`.
///
/// All four share the monthly deadline.
pub fn monthly_obligations(period: RemittancePeriod, today: NaiveDate) -> Vec<ObligationDue> {
    let due = monthly_due_date_on(period, today);
    let status = due.status_text();

    Obligation::MONTHLY
        .iter()
        .map(|&obligation| ObligationDue {
            obligation,
            label: obligation.label().to_string(),
            period: period.to_string(),
            due,
            status: status.clone(),
        })
        .collect()
}

/// P9 and P10 returns for `tax_year`.
pub fn annual_obligations(tax_year: i32, today: NaiveDate) -> EngineResult<Vec<ObligationDue>> {
    let due = annual_due_date_on(tax_year, today)?;
    let status = due.status_text();

    Ok(Obligation::ANNUAL
        .iter()
        .map(|&obligation| ObligationDue {
            obligation,
            label: obligation.label().to_string(),
            period: tax_year.to_string(),
            due,
            status: status.clone(),
        })
        .collect())
}
