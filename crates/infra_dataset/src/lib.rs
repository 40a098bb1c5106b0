//! Dataset Loading Infrastructure
//!
//! Parses the tabular claim source into a validated [`ClaimDataset`]. The
//! column contract is bit-exact: headers must match `Claim ID`, `Region`,
//! `Fraud Score`, `Prior Claims`, and `AI Confidence` including case and
//! spacing. Loading either yields a fully validated dataset or fails; no
//! partial dataset is ever exposed.
//!
//! [`ClaimDataset`]: domain_claims::ClaimDataset

pub mod loader;
pub mod error;

pub use loader::{load_claims_from_path, load_claims_from_reader};
pub use error::LoadError;
