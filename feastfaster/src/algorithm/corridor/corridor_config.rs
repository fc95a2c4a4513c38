use feastfaster_core::util::Projection;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CorridorConfig {
    /// distance from the route to each edge of the corridor
    #[serde(default = "CorridorConfig::default_half_width_meters")]
    pub half_width_meters: f64,
    /// planar projection used while buffering
    #[serde(default)]
    pub projection: Projection,
}

impl CorridorConfig {
    pub const DEFAULT_HALF_WIDTH_METERS: f64 = 5000.0;

    fn default_half_width_meters() -> f64 {
        Self::DEFAULT_HALF_WIDTH_METERS
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.half_width_meters.is_finite() || self.half_width_meters <= 0.0 {
            return Err(format!(
                "corridor half_width_meters must be positive, found {}",
                self.half_width_meters
            ));
        }
        Ok(())
    }
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            half_width_meters: Self::DEFAULT_HALF_WIDTH_METERS,
            projection: Projection::default(),
        }
    }
}
