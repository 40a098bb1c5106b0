//! Query boundary errors

use thiserror::Error;

use domain_claims::{DatasetError, DecisionError};

/// Errors surfaced to the presentation layer.
///
/// Per-query failures (unknown id, ambiguous id, empty dataset) are
/// recoverable: the session stays usable and the caller re-prompts or
/// reports "no data". An invariant violation is not; it means the loader
/// let a bad record through.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Decision(#[from] DecisionError),
}

impl QueryError {
    /// True when the caller can recover by adjusting the query.
    pub fn is_recoverable(&self) -> bool {
        match self {
            QueryError::Dataset(_) => true,
            QueryError::Decision(DecisionError::InvariantViolation { .. }) => false,
        }
    }
}
