//! Rules snapshot loading.
//!
//! This module provides the [`RulesLoader`] type for loading a rules
//! snapshot from a YAML file and validating it once, up front.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::RulesSnapshot;

use super::types::RulesConfig;

/// Loads a single rules snapshot from YAML.
///
/// Which snapshot is the active one is decided by whoever calls the loader;
/// the loader only reads and validates what it is pointed at.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::RulesLoader;
///
/// let rules = RulesLoader::load("./config/rules/kenya_2025.yaml")?;
/// println!("Loaded rules: {}", rules.version());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RulesLoader;

impl RulesLoader {
    /// Loads and validates the snapshot at `path`.
    ///
    /// # Returns
    ///
    /// Returns the validated snapshot, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks a required field (`ConfigParseError`)
    /// - The content fails validation (`Validation`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RulesSnapshot> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        let rules = RulesSnapshot::new(config)?;

        info!(
            path = %path_str,
            version = rules.version(),
            effective_from = %rules.effective_from(),
            brackets = rules.paye_schedule().brackets().len(),
            "Loaded rules snapshot"
        );
        Ok(rules)
    }

    /// Parses and validates a snapshot from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<RulesSnapshot> {
        let config = Self::parse(content, "<inline>")?;
        Ok(RulesSnapshot::new(config)?)
    }

    fn parse(content: &str, path: &str) -> EngineResult<RulesConfig> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
