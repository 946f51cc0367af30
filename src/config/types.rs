//! Business rules configuration types.
//!
//! This module contains the strongly-typed threshold set that is
//! deserialized from the YAML rules file.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The named thresholds governing break deduction and overtime.
///
/// Loaded once per invocation (or constructed directly in tests), validated
/// before any shift is processed, and never mutated during a computation
/// pass. The snapshot is echoed back in every report so the reporting layer
/// can display the thresholds in effect.
///
/// # Example
///
/// ```
/// use attendance_engine::config::BusinessRules;
///
/// let rules = BusinessRules {
///     break_eligible_minutes: 360,
///     break_deduction_minutes: 60,
///     daily_regular_minutes: 480,
/// };
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRules {
    /// Minimum raw shift length, in minutes, that triggers a break deduction.
    pub break_eligible_minutes: i64,
    /// Minutes deducted from a break-eligible shift as an assumed unpaid break.
    pub break_deduction_minutes: i64,
    /// Net minutes per day above which hours count as overtime.
    pub daily_regular_minutes: i64,
}

impl BusinessRules {
    /// Validates the threshold set.
    ///
    /// Returns an error if any threshold is negative, or if
    /// `daily_regular_minutes` is not strictly positive. Validation happens
    /// before any event is processed so a bad rule set fails the whole
    /// computation rather than silently distorting every shift.
    pub fn validate(&self) -> EngineResult<()> {
        if self.break_eligible_minutes < 0 {
            return Err(EngineError::InvalidRules {
                field: "break_eligible_minutes".to_string(),
                message: format!("must be non-negative, got {}", self.break_eligible_minutes),
            });
        }
        if self.break_deduction_minutes < 0 {
            return Err(EngineError::InvalidRules {
                field: "break_deduction_minutes".to_string(),
                message: format!("must be non-negative, got {}", self.break_deduction_minutes),
            });
        }
        if self.daily_regular_minutes <= 0 {
            return Err(EngineError::InvalidRules {
                field: "daily_regular_minutes".to_string(),
                message: format!("must be positive, got {}", self.daily_regular_minutes),
            });
        }
        Ok(())
    }
}

/// Rules file structure.
///
/// The on-disk YAML wraps the thresholds under a `rules` key:
///
/// ```yaml
/// rules:
///   break_eligible_minutes: 360
///   break_deduction_minutes: 60
///   daily_regular_minutes: 480
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// The threshold set.
    pub rules: BusinessRules,
}
