//! Error types for the campus engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fallible operation: policy loading, request validation and
//! leave workflow transitions. The calculation engines themselves never fail
//! on validated input.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LeaveStatus, ReviewDecision};

/// The main error type for the campus engine.
///
/// # Example
///
/// ```
/// use campus_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/leave_policy.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/leave_policy.yaml"
/// );
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

    /// A policy value was outside its allowed range.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A leave application violated a caller-side precondition.
    #[error("Invalid leave application '{leave_id}': {message}")]
    InvalidLeave {
        /// The ID of the invalid leave application.
        leave_id: String,
        /// A description of what made the application invalid.
        message: String,
    },

    /// An attendance record violated a caller-side precondition.
    #[error("Invalid attendance record for student '{student_id}' on {date}: {message}")]
    InvalidAttendance {
        /// The student the record belongs to.
        student_id: String,
        /// The session date of the record.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A review decision was applied to a leave in a stage that does not accept it.
    #[error("Cannot apply '{decision}' to a leave in status '{status}'")]
    InvalidTransition {
        /// The current workflow status.
        status: LeaveStatus,
        /// The decision that was rejected.
        decision: ReviewDecision,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
