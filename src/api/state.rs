//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::compliance::local_today;
use crate::models::RulesSnapshot;

/// Shared application state.
///
/// Holds the rules snapshot the server was started with. Swapping the active
/// snapshot means building a new state; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// The validated rules snapshot.
    rules: Arc<RulesSnapshot>,
    /// Pinned reference date for due-date endpoints; `None` reads the clock.
    today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with the given rules snapshot.
    pub fn new(rules: RulesSnapshot) -> Self {
        Self {
            rules: Arc::new(rules),
            today: None,
        }
    }

    /// Pins "today" for due-date calculations.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Returns the rules snapshot.
    pub fn rules(&self) -> &RulesSnapshot {
        &self.rules
    }

    /// The reference date for due-date calculations.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_pinned_today() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        let state = AppState::new(RulesSnapshot::kenya_2025()).with_today(date);
        assert_eq!(state.today(), date);
    }
}
