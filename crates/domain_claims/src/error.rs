//! Claim domain errors

use thiserror::Error;

/// Errors raised by dataset construction and lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Record {row}: {message}")]
    InvalidValue { row: usize, message: String },

    #[error("Claim not found: {0}")]
    NotFound(String),

    #[error("Ambiguous claim id {id}: {count} records share it")]
    AmbiguousKey { id: String, count: usize },

    #[error("Dataset contains no records")]
    EmptyDataset,
}

/// Errors raised by the decision engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// A record reached classification with an out-of-range field. This
    /// indicates a loader bug upstream; validated datasets never produce it.
    #[error("Claim {id} violates a field invariant: {message}")]
    InvariantViolation { id: String, message: String },
}
