use super::{feasibility_ops as ops, FeasibilityConfig};
use crate::pipeline::PipelineError;
use feastfaster_core::{
    model::{Candidate, FeasibleCandidate},
    service::RoutingService,
};
use geo::Point;
use uom::si::f64::Length;

/// drives a single one-to-many matrix query from the current location to every
/// candidate and drops candidates that would be reached below the minimum
/// state of charge.
pub struct FeasibilityRanker {
    config: FeasibilityConfig,
}

impl FeasibilityRanker {
    pub fn new(config: FeasibilityConfig) -> FeasibilityRanker {
        FeasibilityRanker { config }
    }

    /// # Arguments
    ///
    /// * `routing` - routing service answering the distance matrix query
    /// * `origin` - current vehicle location
    /// * `candidates` - stations that passed the candidate filter
    /// * `current_soc` - state of charge now, percent
    /// * `current_range` - range the vehicle has left at `current_soc`
    ///
    /// # Returns
    ///
    /// the feasible candidates in input order, each carrying its travel time,
    /// distance and arrival state of charge
    pub fn rank(
        &self,
        routing: &dyn RoutingService,
        origin: Point<f64>,
        candidates: Vec<Candidate>,
        current_soc: f64,
        current_range: Length,
    ) -> Result<Vec<FeasibleCandidate>, PipelineError> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }
        let destinations = candidates.iter().map(|c| c.location).collect::<Vec<_>>();
        let matrix = routing.distance_matrix(origin, &destinations)?;
        if !matrix.is_aligned(candidates.len()) {
            return Err(PipelineError::RoutingUnavailable(format!(
                "distance matrix has {} durations and {} distances for {} destinations",
                matrix.durations_s.len(),
                matrix.distances_km.len(),
                candidates.len()
            )));
        }

        let rate = ops::depletion_rate(current_soc, current_range);
        let n_candidates = candidates.len();
        let mut feasible = Vec::with_capacity(n_candidates);
        for (index, candidate) in candidates.into_iter().enumerate() {
            let Some((duration, distance)) = matrix.get(index) else {
                log::debug!(
                    "station {} is unreachable from the current location",
                    candidate.station_id
                );
                continue;
            };
            if !valid_cell(duration.value) || !valid_cell(distance.value) {
                return Err(PipelineError::RoutingUnavailable(format!(
                    "distance matrix cell {index} is invalid: duration {}s, distance {}m",
                    duration.get::<uom::si::time::second>(),
                    distance.get::<uom::si::length::meter>()
                )));
            }
            let distance_km = ops::rounded_distance_km(distance);
            let soc = ops::soc_at_arrival(current_soc, rate, distance_km);
            if soc < self.config.minimum_soc_at_arrival {
                log::debug!(
                    "station {} dropped, arrival soc {}% below minimum {}%",
                    candidate.station_id,
                    soc,
                    self.config.minimum_soc_at_arrival
                );
                continue;
            }
            feasible.push(FeasibleCandidate {
                candidate,
                travel_time_min: ops::travel_time_minutes(duration),
                distance_km,
                soc_at_arrival: soc as u32,
            });
        }
        log::info!(
            "{} of {} candidates reachable with at least {}% charge",
            feasible.len(),
            n_candidates,
            self.config.minimum_soc_at_arrival
        );
        Ok(feasible)
    }
}

fn valid_cell(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
