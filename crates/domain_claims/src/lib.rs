//! Claim Decision Domain
//!
//! This crate implements the decision core of the claim adjudication
//! simulator: validated claim records, the immutable dataset they live in,
//! threshold-based decision classification, and per-region fraud risk
//! aggregation.
//!
//! # Decision flow
//!
//! ```text
//! ClaimDataset -> get(id) -> classify -> Decision (outcome + reason)
//! ClaimDataset -> aggregate -> RegionalSummary (region -> mean fraud score)
//! ```
//!
//! All operations are synchronous and side-effect-free over an immutable
//! snapshot; repeated calls on the same dataset are reproducible.

pub mod record;
pub mod dataset;
pub mod decision;
pub mod aggregation;
pub mod error;

pub use record::{ClaimId, ClaimRecord};
pub use dataset::ClaimDataset;
pub use decision::{classify, Decision, DecisionOutcome};
pub use aggregation::{aggregate, RegionalSummary};
pub use error::{DatasetError, DecisionError};
