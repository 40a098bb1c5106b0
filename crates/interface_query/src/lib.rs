//! Query Interface Layer
//!
//! This crate is the boundary the presentation layer talks to. It wraps an
//! immutable [`ClaimDataset`] in a [`ClaimSession`] and exposes the query
//! surface: claim id listing, record details, decision simulation, regional
//! risk summaries, and the scatter projection for charting.
//!
//! Rendering itself (sidebars, charts, page layout) is an external
//! collaborator and lives outside this workspace.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_query::ClaimSession;
//! use infra_dataset::load_claims_from_path;
//!
//! let dataset = load_claims_from_path("data.csv")?;
//! let session = ClaimSession::new(dataset);
//! let decision = session.decide(&"7".into())?;
//! ```
//!
//! [`ClaimDataset`]: domain_claims::ClaimDataset

pub mod config;
pub mod dto;
pub mod error;
pub mod session;

pub use config::SimConfig;
pub use dto::{ClaimDetails, DecisionView, RegionalSummaryRow, RegionalSummaryView, ScatterPoint};
pub use error::QueryError;
pub use session::ClaimSession;
