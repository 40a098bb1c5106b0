//! Simulation session over one loaded dataset

use domain_claims::{aggregate, classify, ClaimDataset, ClaimId};

use crate::dto::{ClaimDetails, DecisionView, RegionalSummaryView, ScatterPoint};
use crate::error::QueryError;

/// One simulation session: an immutable dataset snapshot plus the query
/// surface the presentation layer calls into.
///
/// The session owns the snapshot and never mutates it, so every query is
/// independently reproducible and sessions can run side by side in tests.
/// There is no interior mutability; sharing a session across threads needs
/// no locking.
#[derive(Debug, Clone)]
pub struct ClaimSession {
    dataset: ClaimDataset,
}

impl ClaimSession {
    pub fn new(dataset: ClaimDataset) -> Self {
        tracing::info!(records = dataset.len(), "claim session opened");
        Self { dataset }
    }

    /// Claim ids in source order, for the record picker.
    pub fn list_claim_ids(&self) -> Vec<ClaimId> {
        self.dataset.claim_ids()
    }

    /// Detail view of one claim.
    ///
    /// # Errors
    ///
    /// `NotFound` or `AmbiguousKey` from the underlying lookup; both are
    /// recoverable by re-prompting.
    pub fn claim_details(&self, id: &ClaimId) -> Result<ClaimDetails, QueryError> {
        let record = self.dataset.get(id)?;
        Ok(ClaimDetails::from(record))
    }

    /// Simulates the adjudication decision for one claim.
    pub fn decide(&self, id: &ClaimId) -> Result<DecisionView, QueryError> {
        let record = self.dataset.get(id)?;
        let decision = classify(record)?;
        Ok(DecisionView::from(decision))
    }

    /// Per-region mean fraud score over the whole dataset.
    ///
    /// Recomputed on demand; the dataset is immutable, so the result is
    /// always consistent with it.
    pub fn regional_summary(&self) -> Result<RegionalSummaryView, QueryError> {
        let summary = aggregate(&self.dataset)?;
        Ok(RegionalSummaryView::from(&summary))
    }

    /// Direct projection of the dataset for the scatter chart. No
    /// computation, just field selection in source order.
    pub fn scatter_data(&self) -> Vec<ScatterPoint> {
        self.dataset.all().iter().map(ScatterPoint::from).collect()
    }
}
