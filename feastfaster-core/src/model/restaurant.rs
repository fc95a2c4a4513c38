use super::{RestaurantId, StationId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub restaurant_id: RestaurantId,
    pub station_id: StationId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
}

impl Restaurant {
    /// true if any of this restaurant's cuisine tags is requested
    pub fn serves_any(&self, cuisines: &BTreeSet<String>) -> bool {
        !self.cuisines.is_disjoint(cuisines)
    }
}
