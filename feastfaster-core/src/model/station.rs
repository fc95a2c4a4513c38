use super::{Charger, Restaurant, StationId};
use crate::util::lon_lat;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a charging station fully hydrated with its restaurants and chargers.
/// immutable once loaded for a request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Station {
    pub station_id: StationId,
    pub name: String,
    pub address: String,
    /// station location, serialized as `[lon, lat]`
    #[serde(with = "lon_lat")]
    pub location: Point<f64>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub chargers: Vec<Charger>,
}
