use super::{EnergyBalancePredictor, HttpChargeTimePredictor};
use feastfaster_core::service::{ChargeTimePredictor, ScoringError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// selects the charging time model loaded at startup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PredictorConfig {
    /// energy balance model over a vehicle table. without a file, the table
    /// bundled with the binary is used.
    EnergyBalance {
        #[serde(default)]
        vehicles_file: Option<String>,
    },
    /// remote model server
    Http {
        url: String,
        #[serde(default = "PredictorConfig::default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl PredictorConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    fn default_timeout_secs() -> u64 {
        Self::DEFAULT_TIMEOUT_SECS
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            PredictorConfig::EnergyBalance { .. } => Ok(()),
            PredictorConfig::Http { url, timeout_secs } => {
                if url.trim().is_empty() {
                    return Err(String::from("http predictor url must not be empty"));
                }
                if *timeout_secs == 0 {
                    return Err(String::from("http predictor timeout_secs must be positive"));
                }
                Ok(())
            }
        }
    }

    pub fn build(&self) -> Result<Arc<dyn ChargeTimePredictor>, ScoringError> {
        match self {
            PredictorConfig::EnergyBalance { vehicles_file } => {
                let predictor = match vehicles_file {
                    Some(file) => EnergyBalancePredictor::from_file(file)?,
                    None => EnergyBalancePredictor::bundled()?,
                };
                Ok(Arc::new(predictor))
            }
            PredictorConfig::Http { url, timeout_secs } => {
                log::info!("scoring charging times with model server at {url}");
                let predictor = HttpChargeTimePredictor::new(url.clone(), *timeout_secs)?;
                Ok(Arc::new(predictor))
            }
        }
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig::EnergyBalance {
            vehicles_file: None,
        }
    }
}
