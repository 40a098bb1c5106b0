//! Claim record and identifier types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single claim record.
///
/// Source cells may hold strings or integers; both are carried as their
/// exact string form, so `7` and `"7"` name the same claim. Equality is
/// string equality, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ClaimId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Inclusive bounds for a fraud score.
pub const FRAUD_SCORE_MIN: Decimal = dec!(0);
pub const FRAUD_SCORE_MAX: Decimal = dec!(1);

/// Inclusive bounds for an AI confidence percentage.
pub const AI_CONFIDENCE_MIN: Decimal = dec!(0);
pub const AI_CONFIDENCE_MAX: Decimal = dec!(100);

/// One row of input data: a single insurance claim with its precomputed
/// risk attributes.
///
/// Scores are `Decimal` so that threshold comparisons and regional means
/// stay exact. `prior_claims` is informational context for the caller and
/// never participates in classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Unique identifier within the dataset
    pub id: ClaimId,
    /// Region label, non-empty, compared case-sensitively
    pub region: String,
    /// Precomputed fraud risk in [0, 1]
    pub fraud_score: Decimal,
    /// Count of prior claims by the same claimant
    pub prior_claims: u32,
    /// Upstream model confidence in [0, 100]
    pub ai_confidence: Decimal,
}

impl ClaimRecord {
    pub fn new(
        id: impl Into<ClaimId>,
        region: impl Into<String>,
        fraud_score: Decimal,
        prior_claims: u32,
        ai_confidence: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            fraud_score,
            prior_claims,
            ai_confidence,
        }
    }

    /// Collects every invariant violation on this record.
    ///
    /// Empty means the record is well-formed. The loader checks this before
    /// a dataset is built; the decision engine re-checks it so that a record
    /// smuggled past validation is rejected rather than misclassified.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.id.as_str().is_empty() {
            violations.push("claim id is empty".to_string());
        }
        if self.region.is_empty() {
            violations.push("region is empty".to_string());
        }
        if self.fraud_score < FRAUD_SCORE_MIN || self.fraud_score > FRAUD_SCORE_MAX {
            violations.push(format!(
                "fraud score {} outside [{}, {}]",
                self.fraud_score, FRAUD_SCORE_MIN, FRAUD_SCORE_MAX
            ));
        }
        if self.ai_confidence < AI_CONFIDENCE_MIN || self.ai_confidence > AI_CONFIDENCE_MAX {
            violations.push(format!(
                "AI confidence {} outside [{}, {}]",
                self.ai_confidence, AI_CONFIDENCE_MIN, AI_CONFIDENCE_MAX
            ));
        }

        violations
    }

    /// True when no invariant is violated.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}
