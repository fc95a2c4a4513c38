use super::{ChargerId, ChargerStatus, StationId};
use serde::{Deserialize, Serialize};
use uom::si::f64::Power;

/// a charging point at a station. refers to its station by id only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Charger {
    pub charger_id: ChargerId,
    pub station_id: StationId,
    /// physical plug standard, such as "CCS" or "CHAdeMO"
    pub connector_type: String,
    /// rated power in kilowatts
    pub power_kw: f64,
    pub status: ChargerStatus,
}

impl Charger {
    /// true if this charger can serve a vehicle with the given plug right now
    pub fn serves(&self, connector_type: &str) -> bool {
        self.connector_type == connector_type && self.status.is_available()
    }

    pub fn power(&self) -> Power {
        Power::new::<uom::si::power::kilowatt>(self.power_kw)
    }
}
