//! Simulator configuration

use serde::Deserialize;

/// Simulator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Path to the claim source CSV
    pub data_path: String,
    /// Log level
    pub log_level: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_path: "data.csv".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from `DSS_`-prefixed environment variables.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("data_path", "data.csv")?
            .set_default("log_level", "info")?
            .add_source(config::Environment::with_prefix("DSS"))
            .build()?
            .try_deserialize()
    }
}
