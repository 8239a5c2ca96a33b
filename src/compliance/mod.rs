//! Compliance due-date scheduling for the Payroll Engine.
//!
//! This module computes statutory filing deadlines and classifies their
//! urgency: monthly PAYE/NSSF/SHIF/AHL remittances and the annual P9/P10
//! returns. Every function is pure given its reference date; the `get_*`
//! forms read the local calendar date for convenience.
//!
//! # Example
//!
//! ```
//! use payroll_engine::compliance::annual_due_date_on;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
//! let info = annual_due_date_on(2023, today).unwrap();
//!
//! assert_eq!(info.due_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! assert!(info.is_due_soon);
//! ```

mod deadlines;
mod obligations;
mod status;

pub use deadlines::{
    MONTHLY_DUE_DAY, annual_due_date, annual_due_date_on, due_date_info, get_annual_due_date,
    get_monthly_due_date, is_leap_year, local_today, monthly_due_date, monthly_due_date_on,
};
pub use obligations::{annual_obligations, monthly_obligations};
