use super::{Charger, Restaurant, StationId};
use crate::util::lon_lat;
use geo::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uom::si::f64::Power;

/// a station that lies in the corridor and matches the requested cuisines and
/// connector. only the matching restaurants and chargers are kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub station_id: StationId,
    pub name: String,
    pub address: String,
    #[serde(with = "lon_lat")]
    pub location: Point<f64>,
    pub restaurants: Vec<Restaurant>,
    pub chargers: Vec<Charger>,
}

impl Candidate {
    /// power of the strongest matching charger
    pub fn best_charger_power(&self) -> Option<Power> {
        self.chargers
            .iter()
            .map(Charger::power)
            .max_by(|a, b| a.value.total_cmp(&b.value))
    }

    pub fn restaurant_names(&self) -> String {
        self.restaurants.iter().map(|r| &r.name).join(", ")
    }
}

/// a candidate that can be reached with at least the minimum state of charge.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeasibleCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub travel_time_min: u32,
    pub distance_km: f64,
    /// state of charge on arrival, percent
    pub soc_at_arrival: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChargerId, ChargerStatus};

    fn charger(id: i64, power_kw: f64) -> Charger {
        Charger {
            charger_id: ChargerId(id),
            station_id: StationId(1),
            connector_type: String::from("CCS"),
            power_kw,
            status: ChargerStatus::Available,
        }
    }

    #[test]
    fn test_best_charger_power() {
        let candidate = Candidate {
            station_id: StationId(1),
            name: String::from("a"),
            address: String::from("b"),
            location: Point::new(0.0, 0.0),
            restaurants: vec![],
            chargers: vec![charger(1, 50.0), charger(2, 150.0), charger(3, 22.0)],
        };
        let best = candidate.best_charger_power().map(|p| p.get::<uom::si::power::kilowatt>());
        assert_eq!(best, Some(150.0));
    }

    #[test]
    fn test_feasible_candidate_serializes_flat() {
        let feasible = FeasibleCandidate {
            candidate: Candidate {
                station_id: StationId(7),
                name: String::from("a"),
                address: String::from("b"),
                location: Point::new(-105.0, 39.7),
                restaurants: vec![],
                chargers: vec![],
            },
            travel_time_min: 12,
            distance_km: 10.25,
            soc_at_arrival: 40,
        };
        let json = serde_json::to_value(&feasible).unwrap();
        assert_eq!(json["station_id"], 7);
        assert_eq!(json["location"][0], -105.0);
        assert_eq!(json["soc_at_arrival"], 40);
    }
}
