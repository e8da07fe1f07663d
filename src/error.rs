//! Error types for the Estron engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in calendar math, storage and
//! configuration loading.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Estron engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use estron_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2024, 4, 7).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
/// };
/// assert_eq!(error.to_string(), "Invalid date range: 2024-04-07 is after 2024-04-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range had its start after its end.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// The week partition of a fiscal month did not cover a reference date.
    ///
    /// This indicates a defect in the boundary arithmetic and is never
    /// expected from a correct build.
    #[error("Internal consistency error for {date}: {message}")]
    InternalConsistency {
        /// The reference date that could not be placed.
        date: NaiveDate,
        /// A description of the inconsistency.
        message: String,
    },

    /// A date has no fiscal month or week that chrono can represent.
    ///
    /// Only reachable within a few weeks of `NaiveDate::MIN`/`NaiveDate::MAX`.
    #[error("Date outside the supported calendar range: {date}")]
    DateOutOfRange {
        /// The date that could not be placed.
        date: NaiveDate,
    },

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

    /// A configuration value is outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The dotted path of the offending setting.
        field: String,
        /// A description of the constraint.
        message: String,
    },

    /// The key-value store failed, or a stored value could not be (de)serialized.
    #[error("Storage error for key '{key}': {message}")]
    Storage {
        /// The storage key involved.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// A quota with the same stage code already exists.
    #[error("Stage code already exists: {code}")]
    DuplicateStageCode {
        /// The conflicting stage code.
        code: String,
    },

    /// No quota with the given id exists.
    #[error("Quota not found: {id}")]
    QuotaNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A record field failed validation.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
