//! Human-readable deadline status.

use crate::models::DueDateInfo;

fn days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

impl DueDateInfo {
    /// A one-line status for badges and remittance lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::compliance::monthly_due_date_on;
    /// use chrono::NaiveDate;
    ///
    /// let period = "2025-01".parse().unwrap();
    /// let info = monthly_due_date_on(period, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
    /// assert_eq!(info.status_text(), "Overdue by 6 days");
    /// ```
    pub fn status_text(&self) -> String {
        if self.is_overdue {
            format!("Overdue by {}", days(-self.days_remaining))
        } else if self.is_due_soon {
            match self.days_remaining {
                0 => "Due today".to_string(),
                1 => "Due tomorrow".to_string(),
                n => format!("Due in {}", days(n)),
            }
        } else {
            format!(
                "Due {} ({} remaining)",
                self.due_date.format("%d %b %Y"),
                days(self.days_remaining)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compliance::{annual_due_date_on, monthly_due_date_on};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_singular() {
        let info = monthly_due_date_on("2025-01".parse().unwrap(), date(2025, 2, 10));
        assert_eq!(info.status_text(), "Overdue by 1 day");
    }

    #[test]
    fn test_due_today_and_tomorrow() {
        let period = "2025-01".parse().unwrap();
        assert_eq!(
            monthly_due_date_on(period, date(2025, 2, 9)).status_text(),
            "Due today"
        );
        assert_eq!(
            monthly_due_date_on(period, date(2025, 2, 8)).status_text(),
            "Due tomorrow"
        );
    }

    #[test]
    fn test_due_soon_counts_days() {
        let info = monthly_due_date_on("2025-01".parse().unwrap(), date(2025, 2, 4));
        assert_eq!(info.status_text(), "Due in 5 days");
    }

    #[test]
    fn test_normal_shows_date() {
        let info = annual_due_date_on(2024, date(2024, 12, 1)).unwrap();
        assert_eq!(info.status_text(), "Due 28 Feb 2025 (89 days remaining)");
    }
}
