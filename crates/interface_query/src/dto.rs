//! Views handed to the presentation layer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_claims::{ClaimId, ClaimRecord, Decision, DecisionOutcome, RegionalSummary};

/// Full detail view of one claim record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDetails {
    pub claim_id: ClaimId,
    pub region: String,
    pub fraud_score: Decimal,
    pub prior_claims: u32,
    pub ai_confidence: Decimal,
}

impl From<&ClaimRecord> for ClaimDetails {
    fn from(record: &ClaimRecord) -> Self {
        Self {
            claim_id: record.id.clone(),
            region: record.region.clone(),
            fraud_score: record.fraud_score,
            prior_claims: record.prior_claims,
            ai_confidence: record.ai_confidence,
        }
    }
}

/// Decision result enriched with display texts.
///
/// The presentation layer branches on `outcome`; `label`, `reason`, and
/// `suggested_action` are ready-made copy, never a branching key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionView {
    pub claim_id: ClaimId,
    pub outcome: DecisionOutcome,
    pub label: String,
    pub reason: String,
    pub suggested_action: String,
}

impl From<Decision> for DecisionView {
    fn from(decision: Decision) -> Self {
        Self {
            claim_id: decision.claim_id,
            label: decision.outcome.label().to_string(),
            suggested_action: decision.outcome.suggested_action().to_string(),
            reason: decision.reason,
            outcome: decision.outcome,
        }
    }
}

/// One point of the fraud-score vs AI-confidence scatter projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub fraud_score: Decimal,
    pub ai_confidence: Decimal,
    pub region: String,
    pub claim_id: ClaimId,
    pub prior_claims: u32,
}

impl From<&ClaimRecord> for ScatterPoint {
    fn from(record: &ClaimRecord) -> Self {
        Self {
            fraud_score: record.fraud_score,
            ai_confidence: record.ai_confidence,
            region: record.region.clone(),
            claim_id: record.id.clone(),
            prior_claims: record.prior_claims,
        }
    }
}

/// Regional summary as an ordered list of rows for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalSummaryView {
    pub rows: Vec<RegionalSummaryRow>,
}

/// One region with its mean fraud score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalSummaryRow {
    pub region: String,
    pub mean_fraud_score: Decimal,
}

impl From<&RegionalSummary> for RegionalSummaryView {
    fn from(summary: &RegionalSummary) -> Self {
        Self {
            rows: summary
                .iter()
                .map(|(region, mean)| RegionalSummaryRow {
                    region: region.to_string(),
                    mean_fraud_score: mean,
                })
                .collect(),
        }
    }
}
