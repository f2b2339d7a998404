//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payroll.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type. Parse
/// failures (bad clock times, bad share links) are ordinary values that
/// callers are expected to recover from, not fatal faults.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     input: "25:00 XM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:00 XM': expected 'h:mm AM|PM'");
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

    /// Configuration parsed but its contents are unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what is wrong.
        message: String,
    },

    /// A clock time did not match the `h:mm AM|PM` pattern.
    #[error("Invalid clock time '{input}': expected 'h:mm AM|PM'")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// A shift type name is not part of the rate table.
    #[error("Unknown shift type: {name}")]
    UnknownShiftType {
        /// The unrecognised shift type name.
        name: String,
    },

    /// A share link token could not be decoded.
    #[error("Invalid share link: {message}")]
    InvalidShareLink {
        /// A description of why decoding failed.
        message: String,
    },

    /// A date range whose end precedes its start.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The start of the range.
        start: chrono::NaiveDate,
        /// The end of the range.
        end: chrono::NaiveDate,
    },

    /// A money amount that must not be negative was negative.
    #[error("Negative {field}: {value}")]
    NegativeAmount {
        /// Which amount was rejected (e.g. "hourly rate").
        field: &'static str,
        /// The rejected value.
        value: rust_decimal::Decimal,
    },

    /// A team member record was invalid or contained inconsistent data.
    #[error("Invalid team member '{name}': {message}")]
    InvalidTeamMember {
        /// The name of the team member.
        name: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A payroll record was asked to make a transition it cannot make.
    #[error("Invalid status transition for payroll record {id}: {message}")]
    InvalidStatusTransition {
        /// The payroll record id.
        id: String,
        /// A description of the rejected transition.
        message: String,
    },

    /// The record store has no record with the given key.
    #[error("{kind} not found: {key}")]
    RecordNotFound {
        /// The kind of record (e.g. "team member").
        kind: &'static str,
        /// The key that was looked up.
        key: String,
    },

    /// The record store already holds a record with the given key.
    #[error("{kind} already exists: {key}")]
    DuplicateRecord {
        /// The kind of record (e.g. "team member").
        kind: &'static str,
        /// The conflicting key.
        key: String,
    },

    /// A legacy client-side export could not be read.
    #[error("Legacy import failed: {message}")]
    LegacyImport {
        /// A description of the failure.
        message: String,
    },

    /// The record store failed for a reason unrelated to the data.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
