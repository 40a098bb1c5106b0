//! Immutable dataset of claim records

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::record::{ClaimId, ClaimRecord};

/// Ordered, immutable collection of claim records.
///
/// Built once at load time and never mutated afterwards; insertion order is
/// source order. Duplicate claim ids are accepted here and surfaced as
/// [`DatasetError::AmbiguousKey`] when a lookup hits them, so the caller can
/// disambiguate instead of silently receiving the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDataset {
    records: Vec<ClaimRecord>,
}

impl ClaimDataset {
    /// Builds a dataset from validated records.
    ///
    /// Re-checks every record's invariants; the first violation aborts
    /// construction so no partial dataset escapes.
    pub fn from_records(records: Vec<ClaimRecord>) -> Result<Self, DatasetError> {
        for (index, record) in records.iter().enumerate() {
            if let Some(message) = record.violations().into_iter().next() {
                return Err(DatasetError::InvalidValue {
                    row: index + 1,
                    message,
                });
            }
        }

        tracing::debug!(records = records.len(), "claim dataset constructed");
        Ok(Self { records })
    }

    /// Exact-match lookup by claim id.
    ///
    /// # Errors
    ///
    /// [`DatasetError::NotFound`] when no record has the id,
    /// [`DatasetError::AmbiguousKey`] when more than one does.
    pub fn get(&self, id: &ClaimId) -> Result<&ClaimRecord, DatasetError> {
        let mut matches = self.records.iter().filter(|r| &r.id == id);

        let first = matches
            .next()
            .ok_or_else(|| DatasetError::NotFound(id.to_string()))?;

        let extra = matches.count();
        if extra > 0 {
            return Err(DatasetError::AmbiguousKey {
                id: id.to_string(),
                count: extra + 1,
            });
        }

        Ok(first)
    }

    /// All records in load order.
    pub fn all(&self) -> &[ClaimRecord] {
        &self.records
    }

    /// Claim ids in load order.
    pub fn claim_ids(&self) -> Vec<ClaimId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
