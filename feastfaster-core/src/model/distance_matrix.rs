use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};

/// one-to-many travel durations and distances, index-aligned with the
/// destinations of the query. `None` marks a destination the routing provider
/// could not reach.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DistanceMatrix {
    pub durations_s: Vec<Option<f64>>,
    pub distances_km: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// travel time and distance to the destination at this index, if reachable
    pub fn get(&self, index: usize) -> Option<(Time, Length)> {
        let duration = self.durations_s.get(index).copied().flatten()?;
        let distance = self.distances_km.get(index).copied().flatten()?;
        Some((
            Time::new::<uom::si::time::second>(duration),
            Length::new::<uom::si::length::kilometer>(distance),
        ))
    }

    /// true when both rows describe the same number of destinations
    pub fn is_aligned(&self, n_destinations: usize) -> bool {
        self.durations_s.len() == n_destinations && self.distances_km.len() == n_destinations
    }
}
