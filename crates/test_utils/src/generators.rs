//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{ClaimId, ClaimRecord};

/// Strategy for in-range fraud scores (four decimal places over [0, 1]).
pub fn fraud_score_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(n as i64, 4))
}

/// Strategy for in-range AI confidence values (two decimal places over [0, 100]).
pub fn ai_confidence_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for small prior-claims counts.
pub fn prior_claims_strategy() -> impl Strategy<Value = u32> {
    0u32..50u32
}

/// Strategy for region labels drawn from a small fixed set.
pub fn region_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("North".to_string()),
        Just("South".to_string()),
        Just("East".to_string()),
        Just("West".to_string()),
    ]
}

/// Strategy for non-empty claim ids.
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    (1u64..1_000_000u64).prop_map(ClaimId::from)
}

/// Strategy for fully valid claim records.
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        claim_id_strategy(),
        region_strategy(),
        fraud_score_strategy(),
        prior_claims_strategy(),
        ai_confidence_strategy(),
    )
        .prop_map(|(id, region, fraud_score, prior_claims, ai_confidence)| {
            ClaimRecord::new(id, region, fraud_score, prior_claims, ai_confidence)
        })
}
