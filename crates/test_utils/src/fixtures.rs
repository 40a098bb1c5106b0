//! Pre-built test data

use rust_decimal_macros::dec;

use domain_claims::{ClaimDataset, ClaimRecord};

/// The three canonical scenario records: one per decision outcome.
pub fn scenario_records() -> Vec<ClaimRecord> {
    vec![
        ClaimRecord::new("7", "West", dec!(0.15), 2, dec!(90)),
        ClaimRecord::new("8", "East", dec!(0.30), 1, dec!(70)),
        ClaimRecord::new("9", "East", dec!(0.50), 5, dec!(40)),
    ]
}

/// Dataset holding the canonical scenario records.
pub fn scenario_dataset() -> ClaimDataset {
    ClaimDataset::from_records(scenario_records())
        .expect("scenario records are valid")
}

/// The scenario records as a CSV source with the exact column contract.
pub fn scenario_csv() -> &'static str {
    "\
Claim ID,Region,Fraud Score,Prior Claims,AI Confidence
7,West,0.15,2,90
8,East,0.30,1,70
9,East,0.50,5,40
"
}

/// A dataset whose regional means are round numbers, for aggregation tests.
pub fn regional_dataset() -> ClaimDataset {
    ClaimDataset::from_records(vec![
        ClaimRecord::new("1", "A", dec!(0.1), 0, dec!(90)),
        ClaimRecord::new("2", "A", dec!(0.3), 1, dec!(70)),
        ClaimRecord::new("3", "B", dec!(0.5), 2, dec!(40)),
    ])
    .expect("regional records are valid")
}
