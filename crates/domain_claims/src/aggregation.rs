//! Regional fraud risk aggregation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dataset::ClaimDataset;
use crate::error::DatasetError;

/// Mapping from region to the arithmetic mean fraud score of its records.
///
/// Backed by a `BTreeMap`, so iteration order is lexicographic by region:
/// stable and reproducible for a given dataset, but not otherwise part of
/// the contract. A region appears only if at least one record carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalSummary {
    means: BTreeMap<String, Decimal>,
}

impl RegionalSummary {
    /// Mean fraud score for a region, if any record carries it.
    pub fn mean_for(&self, region: &str) -> Option<Decimal> {
        self.means.get(region).copied()
    }

    /// Iterates regions and their means in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.means.iter().map(|(region, mean)| (region.as_str(), *mean))
    }

    /// Number of distinct regions.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Computes the per-region mean fraud score over the whole dataset.
///
/// The grouping key is the exact region string, case-sensitive with no
/// trimming. Means are exact decimal arithmetic: sum of scores over group
/// cardinality.
///
/// # Errors
///
/// [`DatasetError::EmptyDataset`] when the dataset holds zero records.
pub fn aggregate(dataset: &ClaimDataset) -> Result<RegionalSummary, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let mut sums: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for record in dataset.all() {
        let entry = sums
            .entry(record.region.clone())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += record.fraud_score;
        entry.1 += Decimal::ONE;
    }

    let means = sums
        .into_iter()
        .map(|(region, (sum, count))| (region, sum / count))
        .collect();

    tracing::debug!(records = dataset.len(), "regional summary computed");
    Ok(RegionalSummary { means })
}
