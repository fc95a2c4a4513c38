use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeasibilityConfig {
    /// stations reached with less state of charge than this (percent) are dropped
    #[serde(default = "FeasibilityConfig::default_minimum_soc_at_arrival")]
    pub minimum_soc_at_arrival: f64,
}

impl FeasibilityConfig {
    pub const DEFAULT_MINIMUM_SOC_AT_ARRIVAL: f64 = 20.0;

    fn default_minimum_soc_at_arrival() -> f64 {
        Self::DEFAULT_MINIMUM_SOC_AT_ARRIVAL
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.minimum_soc_at_arrival) {
            return Err(format!(
                "minimum_soc_at_arrival must be within [0, 100], found {}",
                self.minimum_soc_at_arrival
            ));
        }
        Ok(())
    }
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            minimum_soc_at_arrival: Self::DEFAULT_MINIMUM_SOC_AT_ARRIVAL,
        }
    }
}
