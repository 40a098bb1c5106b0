//! Decision classification logic
//!
//! Maps one claim record to one of three outcomes using fixed, ordered
//! threshold rules. Rules are evaluated top to bottom and the first hit
//! wins; they are not mutually exclusive, so the order is part of the
//! contract. All comparisons are strict, which makes the boundary values
//! (fraud score 0.2 and 0.35, confidence 60 and 85) fall through to the
//! next rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DecisionError;
use crate::record::{ClaimId, ClaimRecord};

const AUTO_APPROVE_FRAUD_BELOW: Decimal = dec!(0.2);
const AUTO_APPROVE_CONFIDENCE_ABOVE: Decimal = dec!(85);
const REVIEW_FRAUD_BELOW: Decimal = dec!(0.35);
const REVIEW_CONFIDENCE_ABOVE: Decimal = dec!(60);

/// Categorical adjudication outcome for a claim record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionOutcome {
    /// Low fraud risk, high model confidence
    AutoApproved,
    /// Needs a manual look before processing
    FlaggedForReview,
    /// High risk or the model cannot be trusted
    EscalatedToManager,
}

impl DecisionOutcome {
    /// Fixed justification text for the rule branch that produces this
    /// outcome. Each outcome is reachable from exactly one branch, so the
    /// reason is a function of the variant.
    pub fn reason(&self) -> &'static str {
        match self {
            DecisionOutcome::AutoApproved => "Low fraud risk and high AI confidence.",
            DecisionOutcome::FlaggedForReview => "Moderate fraud risk or mid-level confidence.",
            DecisionOutcome::EscalatedToManager => "High risk or insufficient AI trust.",
        }
    }

    /// Display label for the presentation layer.
    ///
    /// Callers branch on the variant, never on this text.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionOutcome::AutoApproved => "Auto-approved",
            DecisionOutcome::FlaggedForReview => "Flagged for Review",
            DecisionOutcome::EscalatedToManager => "Escalated to Manager",
        }
    }

    /// Suggested follow-up action for the adjuster handling this outcome.
    pub fn suggested_action(&self) -> &'static str {
        match self {
            DecisionOutcome::AutoApproved => "No action needed. Claim is processed.",
            DecisionOutcome::FlaggedForReview => "Please review manually for verification.",
            DecisionOutcome::EscalatedToManager => {
                "Immediate attention required. Possible fraud or policy violation."
            }
        }
    }
}

/// Result of classifying one claim record.
///
/// Produced fresh per call and never stored back into the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub claim_id: ClaimId,
    pub outcome: DecisionOutcome,
    pub reason: String,
}

/// Classifies a claim record into a decision outcome.
///
/// `prior_claims` is deliberately absent from every predicate; it is carried
/// on the record for display context only.
///
/// # Errors
///
/// [`DecisionError::InvariantViolation`] when a field is outside its declared
/// range. Range checks happen before any rule is evaluated, so an invalid
/// record is never misclassified.
pub fn classify(record: &ClaimRecord) -> Result<Decision, DecisionError> {
    if let Some(message) = record.violations().into_iter().next() {
        return Err(DecisionError::InvariantViolation {
            id: record.id.to_string(),
            message,
        });
    }

    let outcome = if record.fraud_score < AUTO_APPROVE_FRAUD_BELOW
        && record.ai_confidence > AUTO_APPROVE_CONFIDENCE_ABOVE
    {
        DecisionOutcome::AutoApproved
    } else if record.fraud_score < REVIEW_FRAUD_BELOW
        && record.ai_confidence > REVIEW_CONFIDENCE_ABOVE
    {
        DecisionOutcome::FlaggedForReview
    } else {
        DecisionOutcome::EscalatedToManager
    };

    tracing::debug!(
        claim_id = %record.id,
        fraud_score = %record.fraud_score,
        ai_confidence = %record.ai_confidence,
        outcome = ?outcome,
        "claim classified"
    );

    Ok(Decision {
        claim_id: record.id.clone(),
        outcome,
        reason: outcome.reason().to_string(),
    })
}
