//! Loading errors

use thiserror::Error;

use domain_claims::DatasetError;

/// Errors that can occur while loading a claim source
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required column is absent from the header row
    #[error("Required column missing from source: {0}")]
    MissingColumn(String),

    /// A cell could not be coerced to its declared type or violates its range
    #[error("Row {row}: invalid value for {column}: {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },

    /// The source file could not be opened or read
    #[error("Failed to open claim source: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not well-formed CSV
    #[error("Failed to read claim source: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset construction rejected the parsed records
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
