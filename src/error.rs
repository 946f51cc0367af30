//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration problems are errors: malformed events and structural
//! anomalies in the clock log are recovered locally and reported in-band as
//! part of the reconstruction output.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Every variant describes a configuration failure. Configuration is the one
/// thing the engine cannot work around: every duration and overtime decision
/// depends on the loaded thresholds, so a missing or invalid rule set fails
/// the whole computation before any shift is processed.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A business rules threshold was invalid.
    #[error("Invalid business rule '{field}': {message}")]
    InvalidRules {
        /// The threshold field that was invalid.
        field: String,
        /// A description of what made the threshold invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
