//! Error types for the subsidy calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during eligibility evaluation.
//!
//! Only configuration problems and structurally broken input are errors.
//! An employee with a missing salary or hire date is never an error: the
//! rule set fails open into a needs-review result instead. Business
//! non-qualification is a normal `NotEligible` result, not an error.

use thiserror::Error;

use crate::models::Program;

/// The main error type for the subsidy calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use subsidy_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/catalog.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/catalog.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Catalog data failed validation.
    ///
    /// A malformed catalog entry must reject the whole calculation rather
    /// than substitute a default, because an unreported gap would
    /// understate or fabricate a subsidy amount.
    #[error("Invalid catalog data: {message}")]
    CatalogInvalid {
        /// A description of what made the catalog invalid.
        message: String,
    },

    /// No parameters were configured for a program present in a request.
    #[error("Program not configured in catalog: {program}")]
    ProgramNotConfigured {
        /// The program missing from the catalog.
        program: Program,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{employee_id}': {message}")]
    InvalidEmployee {
        /// The id of the invalid employee.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
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
