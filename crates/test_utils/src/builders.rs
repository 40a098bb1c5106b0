//! Builder for claim record test data

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::{ClaimId, ClaimRecord};

/// Builder for [`ClaimRecord`] with sensible valid defaults.
///
/// Defaults produce an auto-approvable claim; override fields to steer the
/// record into another branch.
#[derive(Debug, Clone)]
pub struct ClaimRecordBuilder {
    id: ClaimId,
    region: String,
    fraud_score: Decimal,
    prior_claims: u32,
    ai_confidence: Decimal,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self {
            id: ClaimId::from("1"),
            region: "West".to_string(),
            fraud_score: dec!(0.1),
            prior_claims: 0,
            ai_confidence: dec!(90),
        }
    }
}

impl ClaimRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ClaimId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn fraud_score(mut self, fraud_score: Decimal) -> Self {
        self.fraud_score = fraud_score;
        self
    }

    pub fn prior_claims(mut self, prior_claims: u32) -> Self {
        self.prior_claims = prior_claims;
        self
    }

    pub fn ai_confidence(mut self, ai_confidence: Decimal) -> Self {
        self.ai_confidence = ai_confidence;
        self
    }

    pub fn build(self) -> ClaimRecord {
        ClaimRecord::new(
            self.id,
            self.region,
            self.fraud_score,
            self.prior_claims,
            self.ai_confidence,
        )
    }
}
