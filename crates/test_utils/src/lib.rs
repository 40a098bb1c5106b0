//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the claim decision workspace.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built records, datasets, and CSV sources
//! - `builders`: Builder pattern for claim record construction
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
