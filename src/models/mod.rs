//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod due_date;
mod employee;
mod payroll_result;
mod rules;

pub use compensation::{CompensationInput, MAX_AMOUNT};
pub use due_date::{DeadlineKind, DueDateInfo, Obligation, ObligationDue, RemittancePeriod};
pub use employee::{EMPLOYEE_ID_MIN_DIGITS, EMPLOYEE_ID_PREFIX, EmployeeId};
pub use payroll_result::{AuditStep, PayrollResult};
pub use rules::{PayeBracket, PayeSchedule, RulesSnapshot, TaxBasePolicy};
