use super::corridor::Corridor;
use crate::pipeline::PipelineError;
use feastfaster_core::{
    model::{Candidate, Station},
    service::StationRepository,
};
use std::collections::BTreeSet;

/// selects stations in the corridor that have a restaurant serving one of the
/// requested cuisines and an available charger with the requested connector.
#[derive(Clone, Debug)]
pub struct CandidateFilter {
    cuisines: BTreeSet<String>,
    connector_type: String,
}

impl CandidateFilter {
    pub fn new(cuisines: BTreeSet<String>, connector_type: String) -> CandidateFilter {
        CandidateFilter {
            cuisines,
            connector_type,
        }
    }

    /// runs the spatial query against the repository (envelope prefilter, then exact
    /// intersection) and applies the attribute predicates to each returned station.
    pub fn apply(
        &self,
        repository: &dyn StationRepository,
        corridor: &Corridor,
    ) -> Result<Vec<Candidate>, PipelineError> {
        let stations = repository.query(&corridor.polygon, &corridor.bbox)?;
        let n_stations = stations.len();
        let candidates = stations
            .into_iter()
            .filter_map(|station| self.matches(station))
            .collect::<Vec<_>>();
        log::info!(
            "{} of {} stations in corridor match cuisines {:?} and connector '{}'",
            candidates.len(),
            n_stations,
            self.cuisines,
            self.connector_type
        );
        Ok(candidates)
    }

    /// keeps only the matching restaurants and chargers of a station. returns None
    /// when either list ends up empty.
    pub fn matches(&self, station: Station) -> Option<Candidate> {
        let restaurants = station
            .restaurants
            .into_iter()
            .filter(|r| r.serves_any(&self.cuisines))
            .collect::<Vec<_>>();
        if restaurants.is_empty() {
            return None;
        }
        let chargers = station
            .chargers
            .into_iter()
            .filter(|c| c.serves(&self.connector_type))
            .collect::<Vec<_>>();
        if chargers.is_empty() {
            return None;
        }
        Some(Candidate {
            station_id: station.station_id,
            name: station.name,
            address: station.address,
            location: station.location,
            restaurants,
            chargers,
        })
    }
}
