use crate::predictor::PredictorConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChargingConfig {
    /// ambient temperature in degrees celsius, fed to every charging time prediction
    #[serde(default = "ChargingConfig::default_ambient_temperature")]
    pub ambient_temperature: f64,
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl ChargingConfig {
    pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 20.0;

    fn default_ambient_temperature() -> f64 {
        Self::DEFAULT_AMBIENT_TEMPERATURE
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(-60.0..=60.0).contains(&self.ambient_temperature) {
            return Err(format!(
                "charging ambient_temperature must be within [-60, 60] celsius, found {}",
                self.ambient_temperature
            ));
        }
        self.predictor.validate()
    }
}

impl Default for ChargingConfig {
    fn default() -> Self {
        Self {
            ambient_temperature: Self::DEFAULT_AMBIENT_TEMPERATURE,
            predictor: PredictorConfig::default(),
        }
    }
}
