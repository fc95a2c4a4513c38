use super::FeasibleCandidate;
use serde::{Deserialize, Serialize};

/// final result row of a station search
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RankedStation {
    #[serde(flatten)]
    pub feasible: FeasibleCandidate,
    pub estimate_charging_time_min: u32,
}

impl RankedStation {
    pub fn distance_km(&self) -> f64 {
        self.feasible.distance_km
    }
}
