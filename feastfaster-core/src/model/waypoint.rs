use serde::{Deserialize, Serialize};

/// a sampled position along a route
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    /// minutes since departure
    pub time_min: u64,
    /// kilometers traveled since departure
    pub distance_km: f64,
}
