//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the business
//! rules thresholds from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BusinessRules, RulesFile};

/// Loads and provides access to the business rules configuration.
///
/// The `ConfigLoader` reads the YAML rules file, validates the thresholds,
/// and fails fast on any problem so no shift is ever processed against a
/// missing or invalid rule set.
///
/// # File Structure
///
/// ```text
/// config/
/// └── rules.yaml    # break/overtime thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
/// let rules = loader.rules();
/// println!(
///     "Shifts of {}+ minutes lose a {} minute break",
///     rules.break_eligible_minutes, rules.break_deduction_minutes
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: BusinessRules,
}

impl ConfigLoader {
    /// Loads and validates the rules file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rules YAML file (e.g., "./config/rules.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing a required threshold
    /// - Any threshold value fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/rules.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: RulesFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        file.rules.validate()?;

        Ok(Self { rules: file.rules })
    }

    /// Creates a loader from an already-constructed rule set.
    ///
    /// Validates the thresholds the same way [`ConfigLoader::load`] does.
    pub fn from_rules(rules: BusinessRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the loaded thresholds.
    pub fn rules(&self) -> &BusinessRules {
        &self.rules
    }
}
