//! Error types for the Availability Resolution and Shift Expansion Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during resolution and expansion.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::DateParse {
///     input: "2024/03/05".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid calendar date '2024/03/05': expected canonical YYYY-MM-DD"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date key failed canonical `YYYY-MM-DD` validation.
    ///
    /// A corrupted date key is a caller bug and is always propagated,
    /// never silently coerced to some default.
    #[error("Invalid calendar date '{input}': expected canonical YYYY-MM-DD")]
    DateParse {
        /// The input string that failed validation.
        input: String,
    },

    /// Date components were outside the valid calendar range.
    #[error("Calendar date out of range: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-indexed).
        month: u32,
        /// The day component.
        day: u32,
    },

    /// A time-of-day string failed `HH:MM` validation.
    #[error("Invalid time of day '{input}': expected zero-padded HH:MM")]
    TimeParse {
        /// The input string that failed validation.
        input: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Task template was not found in the configuration.
    #[error("Task template not found: {task_id}")]
    TaskNotFound {
        /// The task id that was not found.
        task_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
