use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Eta {
    pub distance_km: f64,
    pub travel_time_min: u32,
}
