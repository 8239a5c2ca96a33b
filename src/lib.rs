//! Payroll Engine for Kenyan statutory payroll
//!
//! This crate computes a monthly net-pay breakdown (PAYE, NSSF, SHIF, AHL,
//! HELB and voluntary deductions) from an employee's compensation and a
//! versioned rules snapshot, and schedules the statutory remittance and
//! filing deadlines that follow from running payroll.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
