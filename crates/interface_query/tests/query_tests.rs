//! End-to-end tests through the query facade

use rust_decimal_macros::dec;

use domain_claims::{ClaimId, DatasetError, DecisionOutcome};
use infra_dataset::load_claims_from_reader;
use interface_query::{ClaimSession, QueryError};
use test_utils::{scenario_csv, scenario_dataset, ClaimRecordBuilder};

fn scenario_session() -> ClaimSession {
    ClaimSession::new(scenario_dataset())
}

// ============================================================================
// Scenario Tests (source -> session -> decision)
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_auto_approved_end_to_end() {
        let session = scenario_session();
        let decision = session.decide(&ClaimId::from("7")).unwrap();

        assert_eq!(decision.outcome, DecisionOutcome::AutoApproved);
        assert_eq!(decision.reason, "Low fraud risk and high AI confidence.");
        assert_eq!(decision.label, "Auto-approved");
        assert_eq!(decision.suggested_action, "No action needed. Claim is processed.");
    }

    #[test]
    fn test_flagged_for_review_end_to_end() {
        let session = scenario_session();
        let decision = session.decide(&ClaimId::from("8")).unwrap();

        assert_eq!(decision.outcome, DecisionOutcome::FlaggedForReview);
        assert_eq!(decision.reason, "Moderate fraud risk or mid-level confidence.");
        assert_eq!(
            decision.suggested_action,
            "Please review manually for verification."
        );
    }

    #[test]
    fn test_escalated_end_to_end() {
        let session = scenario_session();
        let decision = session.decide(&ClaimId::from("9")).unwrap();

        assert_eq!(decision.outcome, DecisionOutcome::EscalatedToManager);
        assert_eq!(decision.reason, "High risk or insufficient AI trust.");
        assert_eq!(
            decision.suggested_action,
            "Immediate attention required. Possible fraud or policy violation."
        );
    }

    #[test]
    fn test_csv_source_and_fixture_dataset_agree() {
        let from_csv = ClaimSession::new(load_claims_from_reader(scenario_csv().as_bytes()).unwrap());
        let from_fixture = scenario_session();

        for id in ["7", "8", "9"] {
            let id = ClaimId::from(id);
            assert_eq!(
                from_csv.decide(&id).unwrap(),
                from_fixture.decide(&id).unwrap()
            );
        }
    }
}

// ============================================================================
// Query Surface Tests
// ============================================================================

mod query_surface_tests {
    use super::*;

    #[test]
    fn test_list_claim_ids_in_source_order() {
        let session = scenario_session();
        let ids: Vec<String> = session
            .list_claim_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["7", "8", "9"]);
    }

    #[test]
    fn test_claim_details_projection() {
        let session = scenario_session();
        let details = session.claim_details(&ClaimId::from("7")).unwrap();

        assert_eq!(details.region, "West");
        assert_eq!(details.fraud_score, dec!(0.15));
        assert_eq!(details.prior_claims, 2);
        assert_eq!(details.ai_confidence, dec!(90));
    }

    #[test]
    fn test_unknown_id_is_recoverable() {
        let session = scenario_session();
        let err = session.decide(&ClaimId::from("99")).unwrap_err();

        assert!(err.is_recoverable());
        assert!(matches!(
            err,
            QueryError::Dataset(DatasetError::NotFound(_))
        ));

        // The session stays usable after a failed query.
        assert!(session.decide(&ClaimId::from("7")).is_ok());
    }

    #[test]
    fn test_regional_summary_rows() {
        let session = scenario_session();
        let summary = session.regional_summary().unwrap();

        // East holds claims 8 and 9, West holds claim 7.
        assert_eq!(summary.rows.len(), 2);
        let east = summary.rows.iter().find(|r| r.region == "East").unwrap();
        let west = summary.rows.iter().find(|r| r.region == "West").unwrap();
        assert_eq!(east.mean_fraud_score, dec!(0.40));
        assert_eq!(west.mean_fraud_score, dec!(0.15));
    }

    #[test]
    fn test_regional_summary_on_empty_dataset_is_recoverable() {
        let dataset = domain_claims::ClaimDataset::from_records(Vec::new()).unwrap();
        let session = ClaimSession::new(dataset);

        let err = session.regional_summary().unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(
            err,
            QueryError::Dataset(DatasetError::EmptyDataset)
        ));
    }

    #[test]
    fn test_scatter_data_is_direct_projection() {
        let session = scenario_session();
        let points = session.scatter_data();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].claim_id, ClaimId::from("7"));
        assert_eq!(points[0].fraud_score, dec!(0.15));
        assert_eq!(points[0].ai_confidence, dec!(90));
        assert_eq!(points[0].region, "West");
        assert_eq!(points[0].prior_claims, 2);
    }

    #[test]
    fn test_decision_view_serializes() {
        let session = scenario_session();
        let decision = session.decide(&ClaimId::from("7")).unwrap();

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["outcome"], "AutoApproved");
        assert_eq!(json["claim_id"], "7");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let first = scenario_session();
        let second = ClaimSession::new(
            domain_claims::ClaimDataset::from_records(vec![ClaimRecordBuilder::new()
                .id("42")
                .region("North")
                .build()])
            .unwrap(),
        );

        assert_eq!(first.list_claim_ids().len(), 3);
        assert_eq!(second.list_claim_ids(), vec![ClaimId::from("42")]);
    }
}
