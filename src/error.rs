//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/table.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tax table file not found: /missing/table.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Tax table file was not found at the specified path.
    #[error("Tax table file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tax table file could not be parsed.
    #[error("Failed to parse tax table file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Tax table contents failed a consistency check.
    #[error("Invalid tax table: {message}")]
    ConfigValidation {
        /// A description of the inconsistency.
        message: String,
    },

    /// A calculation input was invalid or contained inconsistent data.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Deductions exceeded gross pay, which valid inputs can never produce.
    #[error("Negative net salary {net_salary} for employee '{employee_id}'")]
    NegativeNetSalary {
        /// The employee whose payslip came out negative.
        employee_id: String,
        /// The computed net salary.
        net_salary: Decimal,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
