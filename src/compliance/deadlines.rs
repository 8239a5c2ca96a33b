//! Statutory deadline computation.
//!
//! Monthly remittances for a period fall due on the 9th of the following
//! month. Annual returns for a tax year fall due on the last day of February
//! of the next year. Urgency is measured in whole days between the due date
//! and a reference "today", both taken as calendar dates so that partial-day
//! deltas cannot shift the count.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DeadlineKind, DueDateInfo, RemittancePeriod};

/// Day of the following month on which monthly remittances are due.
pub const MONTHLY_DUE_DAY: u32 = 9;

/// Gregorian leap-year rule.
///
/// # Examples
///
/// ```
/// use payroll_engine::compliance::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2025));
/// assert!(!is_leap_year(2100));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Due date of the monthly remittance for `period`.
///
/// December periods roll into January of the next year.
pub fn monthly_due_date(period: RemittancePeriod) -> NaiveDate {
    let (year, month) = period.next();
    // RemittancePeriod caps the year at 9999, so this date always exists.
    NaiveDate::from_ymd_opt(year, month, MONTHLY_DUE_DAY).unwrap_or(NaiveDate::MAX)
}

/// Due date of the annual returns for `tax_year`: the last day of February
/// of `tax_year + 1`.
///
/// # Errors
///
/// Returns `InvalidTaxYear` if the due date is outside the representable
/// calendar.
///
/// # Examples
///
/// ```
/// use payroll_engine::compliance::annual_due_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(annual_due_date(2023).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(annual_due_date(2024).unwrap(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
pub fn annual_due_date(tax_year: i32) -> EngineResult<NaiveDate> {
    let filing_year = tax_year
        .checked_add(1)
        .ok_or(EngineError::InvalidTaxYear { year: tax_year })?;
    let last_day = if is_leap_year(filing_year) { 29 } else { 28 };

    NaiveDate::from_ymd_opt(filing_year, 2, last_day)
        .ok_or(EngineError::InvalidTaxYear { year: tax_year })
}

/// Classifies a due date relative to `today`.
///
/// `is_overdue` is `days_remaining < 0`; `is_due_soon` is
/// `0 <= days_remaining <= threshold` for the deadline class.
pub fn due_date_info(kind: DeadlineKind, due_date: NaiveDate, today: NaiveDate) -> DueDateInfo {
    let days_remaining = (due_date - today).num_days();
    let info = DueDateInfo {
        kind,
        due_date,
        days_remaining,
        is_overdue: days_remaining < 0,
        is_due_soon: (0..=kind.due_soon_threshold_days()).contains(&days_remaining),
    };

    debug!(
        kind = ?kind,
        due_date = %due_date,
        today = %today,
        days_remaining,
        "Classified due date"
    );
    info
}

/// Monthly remittance deadline for `period`, measured from `today`.
pub fn monthly_due_date_on(period: RemittancePeriod, today: NaiveDate) -> DueDateInfo {
    due_date_info(
        DeadlineKind::MonthlyRemittance,
        monthly_due_date(period),
        today,
    )
}

/// Annual return deadline for `tax_year`, measured from `today`.
pub fn annual_due_date_on(tax_year: i32, today: NaiveDate) -> EngineResult<DueDateInfo> {
    Ok(due_date_info(
        DeadlineKind::AnnualReturn,
        annual_due_date(tax_year)?,
        today,
    ))
}

/// The current local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monthly remittance deadline for a `YYYY-MM` period, measured from the
/// local date.
///
/// # Errors
///
/// Returns `InvalidPeriod` if `period` is not a valid `YYYY-MM` month.
pub fn get_monthly_due_date(period: &str) -> EngineResult<DueDateInfo> {
    let period: RemittancePeriod = period.parse()?;
    Ok(monthly_due_date_on(period, local_today()))
}

/// Annual return deadline for `tax_year`, measured from the local date.
pub fn get_annual_due_date(tax_year: i32) -> EngineResult<DueDateInfo> {
    annual_due_date_on(tax_year, local_today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(text: &str) -> RemittancePeriod {
        text.parse().unwrap()
    }

    // ==========================================================================
    // MDD-001..005: monthly remittance deadline
    // ==========================================================================

    #[test]
    fn test_mdd_001_due_on_ninth_of_following_month() {
        assert_eq!(monthly_due_date(period("2025-01")), date(2025, 2, 9));
    }

    #[test]
    fn test_mdd_002_december_rolls_into_next_year() {
        assert_eq!(monthly_due_date(period("2025-12")), date(2026, 1, 9));
    }

    #[test]
    fn test_mdd_003_overdue_after_due_date() {
        let info = monthly_due_date_on(period("2025-01"), date(2025, 2, 15));

        assert_eq!(info.due_date, date(2025, 2, 9));
        assert_eq!(info.days_remaining, -6);
        assert!(info.is_overdue);
        assert!(!info.is_due_soon);
        assert_eq!(info.kind, DeadlineKind::MonthlyRemittance);
    }

    #[test]
    fn test_mdd_004_due_soon_window_is_seven_days() {
        let seven = monthly_due_date_on(period("2025-01"), date(2025, 2, 2));
        assert_eq!(seven.days_remaining, 7);
        assert!(seven.is_due_soon);

        let eight = monthly_due_date_on(period("2025-01"), date(2025, 2, 1));
        assert_eq!(eight.days_remaining, 8);
        assert!(!eight.is_due_soon);
        assert!(!eight.is_overdue);
    }

    #[test]
    fn test_mdd_005_due_today_is_due_soon_not_overdue() {
        let info = monthly_due_date_on(period("2025-01"), date(2025, 2, 9));

        assert_eq!(info.days_remaining, 0);
        assert!(info.is_due_soon);
        assert!(!info.is_overdue);
    }

    // ==========================================================================
    // ADD-001..005: annual return deadline
    // ==========================================================================

    #[test]
    fn test_add_001_leap_year_filing() {
        assert_eq!(annual_due_date(2023).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_add_002_common_year_filing() {
        assert_eq!(annual_due_date(2024).unwrap(), date(2025, 2, 28));
    }

    #[test]
    fn test_add_003_century_rules() {
        assert_eq!(annual_due_date(2099).unwrap(), date(2100, 2, 28));
        assert_eq!(annual_due_date(1999).unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn test_add_004_due_soon_window_is_thirty_days() {
        let thirty = annual_due_date_on(2024, date(2025, 1, 29)).unwrap();
        assert_eq!(thirty.days_remaining, 30);
        assert!(thirty.is_due_soon);

        let thirty_one = annual_due_date_on(2024, date(2025, 1, 28)).unwrap();
        assert_eq!(thirty_one.days_remaining, 31);
        assert!(!thirty_one.is_due_soon);
    }

    #[test]
    fn test_add_005_overdue_annual_return() {
        let info = annual_due_date_on(2023, date(2024, 3, 1)).unwrap();

        assert_eq!(info.days_remaining, -1);
        assert!(info.is_overdue);
        assert_eq!(info.kind, DeadlineKind::AnnualReturn);
    }

    #[test]
    fn test_unrepresentable_tax_year_rejected() {
        assert!(matches!(
            annual_due_date(i32::MAX),
            Err(EngineError::InvalidTaxYear { year }) if year == i32::MAX
        ));
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_get_monthly_due_date_rejects_bad_period() {
        assert!(matches!(
            get_monthly_due_date("2025-13"),
            Err(EngineError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_get_monthly_due_date_uses_local_today() {
        let before = local_today();
        let info = get_monthly_due_date("2025-01").unwrap();
        let after = local_today();

        assert_eq!(info.due_date, date(2025, 2, 9));
        // The date may roll over between reads.
        let latest = (info.due_date - before).num_days();
        let earliest = (info.due_date - after).num_days();
        assert!((earliest..=latest).contains(&info.days_remaining));
    }
}
