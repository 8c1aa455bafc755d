//! Error types for the Termination Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading statutory tables
//! or serving calculation requests.
//!
//! The termination engine itself never fails: invalid or inconsistent
//! inputs degrade to zero-clamped numeric outputs and audit warnings.
//! Errors exist only at the configuration and HTTP boundaries.

use thiserror::Error;

/// The main error type for the Termination Calculation Engine.
///
/// # Example
///
/// ```
/// use clt_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A loaded bracket table violated a structural invariant.
    #[error("Invalid table '{table}': {message}")]
    InvalidTable {
        /// The table that failed validation (e.g., "inss", "irrf").
        table: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// No statutory table set is available for the requested year.
    #[error("No tax tables available for year {year}")]
    TablesNotFound {
        /// The calendar year for which tables were requested.
        year: i32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
