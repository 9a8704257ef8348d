//! Validation error types.

use thiserror::Error;

/// User-correctable validation failures.
///
/// These surface as blocking alerts at the UI boundary; the operation
/// that triggered them is aborted with no partial state change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A trial must have a non-empty name.
    #[error("trial name must not be empty")]
    EmptyName,

    /// The all-loss deadline must lie in the future.
    #[error("all-loss time must be in the future")]
    AllLossInPast,

    /// A time entry was not a whole number.
    #[error("time entry is not a number: {entry}")]
    NotNumeric {
        /// The rejected input.
        entry: String,
    },

    /// A time entry was negative.
    #[error("time entry must not be negative: {value}")]
    NegativeTime {
        /// The rejected value.
        value: i64,
    },

    /// A seconds sub-field must stay below one minute.
    #[error("seconds must be less than 60: {seconds}")]
    SecondsOutOfRange {
        /// The rejected seconds value.
        seconds: i64,
    },

    /// A time entry is larger than any trackable allotment.
    #[error("time entry too large: {minutes} min {seconds} sec")]
    TimeTooLarge {
        /// The rejected minutes value.
        minutes: i64,
        /// The rejected seconds value.
        seconds: i64,
    },

    /// A trial is missing a field required before upload.
    #[error("trial details incomplete: missing {missing}")]
    IncompleteDetails {
        /// The first missing field, camelCase as in the wire format.
        missing: &'static str,
    },
}

/// Result type for validation checks.
pub type Result<T> = std::result::Result<T, ValidationError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
