//! Claim Decision Simulator Binary
//!
//! Loads a claim dataset and simulates the adjudication decision for one
//! claim, printing the result and the regional risk summary as JSON. This
//! binary is the "external caller" of the query interface; anything fancier
//! than wiring belongs to a real presentation layer.
//!
//! # Usage
//!
//! ```bash
//! # List claim ids in the source
//! dss-sim data.csv
//!
//! # Decide one claim
//! dss-sim data.csv 7
//!
//! # Source path from the environment instead
//! DSS_DATA_PATH=data.csv dss-sim
//! ```
//!
//! # Environment Variables
//!
//! * `DSS_DATA_PATH` - Path to the claim source CSV (default: data.csv)
//! * `DSS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::ClaimId;
use infra_dataset::load_claims_from_path;
use interface_query::{ClaimSession, SimConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = SimConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level);

    let mut args = std::env::args().skip(1);
    let data_path = args.next().unwrap_or_else(|| config.data_path.clone());
    let claim_id = args.next().map(ClaimId::new);

    tracing::info!(path = %data_path, "starting claim decision simulation");

    let dataset = load_claims_from_path(&data_path)
        .with_context(|| format!("failed to load claim source {data_path}"))?;
    let session = ClaimSession::new(dataset);

    match claim_id {
        Some(id) => {
            let details = session
                .claim_details(&id)
                .with_context(|| format!("claim {id} is not selectable"))?;
            let decision = session.decide(&id)?;

            println!("{}", serde_json::to_string_pretty(&details)?);
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        None => {
            let ids: Vec<String> = session
                .list_claim_ids()
                .iter()
                .map(|id| id.to_string())
                .collect();
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
    }

    let summary = session
        .regional_summary()
        .context("regional summary unavailable")?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
