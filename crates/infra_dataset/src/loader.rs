//! CSV claim source loader

use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use domain_claims::record::{
    AI_CONFIDENCE_MAX, AI_CONFIDENCE_MIN, FRAUD_SCORE_MAX, FRAUD_SCORE_MIN,
};
use domain_claims::{ClaimDataset, ClaimId, ClaimRecord};

use crate::error::LoadError;

/// Required column headers, matched exactly (case and spacing).
pub const COLUMN_CLAIM_ID: &str = "Claim ID";
pub const COLUMN_REGION: &str = "Region";
pub const COLUMN_FRAUD_SCORE: &str = "Fraud Score";
pub const COLUMN_PRIOR_CLAIMS: &str = "Prior Claims";
pub const COLUMN_AI_CONFIDENCE: &str = "AI Confidence";

/// Header positions of the required columns.
struct ColumnIndex {
    claim_id: usize,
    region: usize,
    fraud_score: usize,
    prior_claims: usize,
    ai_confidence: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            claim_id: find(COLUMN_CLAIM_ID)?,
            region: find(COLUMN_REGION)?,
            fraud_score: find(COLUMN_FRAUD_SCORE)?,
            prior_claims: find(COLUMN_PRIOR_CLAIMS)?,
            ai_confidence: find(COLUMN_AI_CONFIDENCE)?,
        })
    }
}

/// Loads a claim dataset from a CSV file on disk.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be opened; otherwise see
/// [`load_claims_from_reader`].
pub fn load_claims_from_path(path: impl AsRef<Path>) -> Result<ClaimDataset, LoadError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading claim source");

    let file = File::open(path)?;
    load_claims_from_reader(BufReader::new(file))
}

/// Loads a claim dataset from any CSV reader.
///
/// Columns beyond the required five are ignored. Duplicate claim ids are
/// accepted; lookups against them report ambiguity instead.
///
/// # Errors
///
/// * [`LoadError::MissingColumn`] - a required header is absent.
/// * [`LoadError::InvalidValue`] - a cell fails type coercion or its range
///   invariant; `row` is the 1-based data row.
/// * [`LoadError::Csv`] - the source is malformed or fails mid-read.
pub fn load_claims_from_reader<R: Read>(reader: R) -> Result<ClaimDataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let row_number = index + 1;
        records.push(parse_row(&row, &columns, row_number)?);
    }

    let dataset = ClaimDataset::from_records(records)?;
    tracing::info!(records = dataset.len(), "claim source loaded");
    Ok(dataset)
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnIndex,
    row_number: usize,
) -> Result<ClaimRecord, LoadError> {
    let cell = |index: usize, column: &str| {
        row.get(index).ok_or_else(|| LoadError::InvalidValue {
            row: row_number,
            column: column.to_string(),
            message: "cell is missing".to_string(),
        })
    };

    let id = cell(columns.claim_id, COLUMN_CLAIM_ID)?;
    if id.is_empty() {
        return Err(invalid(row_number, COLUMN_CLAIM_ID, "cell is empty"));
    }

    let region = cell(columns.region, COLUMN_REGION)?;
    if region.is_empty() {
        return Err(invalid(row_number, COLUMN_REGION, "cell is empty"));
    }

    let fraud_score = parse_decimal(cell(columns.fraud_score, COLUMN_FRAUD_SCORE)?)
        .map_err(|m| invalid(row_number, COLUMN_FRAUD_SCORE, &m))?;
    if fraud_score < FRAUD_SCORE_MIN || fraud_score > FRAUD_SCORE_MAX {
        return Err(invalid(
            row_number,
            COLUMN_FRAUD_SCORE,
            &format!("{fraud_score} outside [{FRAUD_SCORE_MIN}, {FRAUD_SCORE_MAX}]"),
        ));
    }

    let prior_claims: u32 = cell(columns.prior_claims, COLUMN_PRIOR_CLAIMS)?
        .parse()
        .map_err(|_| {
            invalid(
                row_number,
                COLUMN_PRIOR_CLAIMS,
                "not a non-negative integer",
            )
        })?;

    let ai_confidence = parse_decimal(cell(columns.ai_confidence, COLUMN_AI_CONFIDENCE)?)
        .map_err(|m| invalid(row_number, COLUMN_AI_CONFIDENCE, &m))?;
    if ai_confidence < AI_CONFIDENCE_MIN || ai_confidence > AI_CONFIDENCE_MAX {
        return Err(invalid(
            row_number,
            COLUMN_AI_CONFIDENCE,
            &format!("{ai_confidence} outside [{AI_CONFIDENCE_MIN}, {AI_CONFIDENCE_MAX}]"),
        ));
    }

    Ok(ClaimRecord::new(
        ClaimId::new(id),
        region,
        fraud_score,
        prior_claims,
        ai_confidence,
    ))
}

fn parse_decimal(cell: &str) -> Result<Decimal, String> {
    Decimal::from_str(cell).map_err(|_| format!("'{cell}' is not a number"))
}

fn invalid(row: usize, column: &str, message: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column: column.to_string(),
        message: message.to_string(),
    }
}
