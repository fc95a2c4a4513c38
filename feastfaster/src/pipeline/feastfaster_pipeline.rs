use super::{PipelineError, StationRequest};
use crate::algorithm::{
    charge_time::ChargeTimeEstimator,
    corridor::{Corridor, CorridorBuilder, CorridorConfig},
    feasibility::{feasibility_ops, FeasibilityConfig, FeasibilityRanker},
    route_sampler::{RouteSampler, SamplingInterval},
    CandidateFilter,
};
use feastfaster_core::{
    model::{Eta, RankedStation, ReservationId, StationId, Waypoint},
    service::{ChargeTimePredictor, RoutingService, StationRepository},
    util::geo_utils,
};
use geo::Point;
use std::sync::Arc;
use uom::si::f64::Length;

/// station search, route sampling and arrival estimates over injected
/// collaborators. holds no per-request state, so one instance serves
/// concurrent requests.
pub struct FeastFasterPipeline {
    routing: Arc<dyn RoutingService>,
    repository: Arc<dyn StationRepository>,
    predictor: Arc<dyn ChargeTimePredictor>,
    corridor_builder: CorridorBuilder,
    feasibility_ranker: FeasibilityRanker,
    charge_time_estimator: ChargeTimeEstimator,
}

impl FeastFasterPipeline {
    pub fn new(
        routing: Arc<dyn RoutingService>,
        repository: Arc<dyn StationRepository>,
        predictor: Arc<dyn ChargeTimePredictor>,
        corridor: CorridorConfig,
        feasibility: FeasibilityConfig,
        ambient_temperature: f64,
    ) -> FeastFasterPipeline {
        FeastFasterPipeline {
            routing,
            repository,
            predictor,
            corridor_builder: CorridorBuilder::new(corridor),
            feasibility_ranker: FeasibilityRanker::new(feasibility),
            charge_time_estimator: ChargeTimeEstimator::new(ambient_temperature),
        }
    }

    /// stations along the route from the current location to the destination
    /// with a restaurant serving a requested cuisine and an available charger
    /// with the requested connector, reachable with at least the minimum state
    /// of charge. sorted nearest first; stations at equal distance keep
    /// repository order.
    pub fn find_stations(
        &self,
        request: &StationRequest,
    ) -> Result<Vec<RankedStation>, PipelineError> {
        request.validate()?;
        let corridor = self.corridor(request.current_location, request.destination)?;

        let filter = CandidateFilter::new(request.cuisines.clone(), request.connector_type.clone());
        let candidates = filter.apply(self.repository.as_ref(), &corridor)?;

        let feasible = self.feasibility_ranker.rank(
            self.routing.as_ref(),
            request.current_location,
            candidates,
            request.current_soc,
            Length::new::<uom::si::length::kilometer>(request.current_car_range),
        )?;

        let mut ranked = self.charge_time_estimator.estimate(
            self.predictor.as_ref(),
            &request.ev_model,
            request.desired_soc,
            feasible,
        )?;
        feasibility_ops::sort_by_distance(&mut ranked);

        for station in ranked.iter() {
            let candidate = &station.feasible.candidate;
            log::debug!(
                "station {} at {}km: {} min charging, restaurants: {}",
                candidate.station_id,
                station.distance_km(),
                station.estimate_charging_time_min,
                candidate.restaurant_names()
            );
        }
        log::info!("found {} stations", ranked.len());
        Ok(ranked)
    }

    /// the search corridor around the route between two points
    pub fn corridor(
        &self,
        origin: Point<f64>,
        destination: Point<f64>,
    ) -> Result<Corridor, PipelineError> {
        validate_point("origin", &origin)?;
        validate_point("destination", &destination)?;
        self.corridor_builder
            .build(self.routing.as_ref(), origin, destination)
    }

    /// waypoints every `interval_minutes` along the route from origin to destination
    pub fn sample_route(
        &self,
        origin: Point<f64>,
        destination: Point<f64>,
        interval_minutes: i64,
    ) -> Result<Vec<Waypoint>, PipelineError> {
        let sampler = RouteSampler::new(SamplingInterval::try_from(interval_minutes)?);
        validate_point("origin", &origin)?;
        validate_point("destination", &destination)?;
        let route = self.routing.directions(origin, destination)?;
        sampler.sample_route(&route)
    }

    /// waypoints along the route to a known station
    pub fn sample_route_to_station(
        &self,
        origin: Point<f64>,
        station_id: StationId,
        interval_minutes: i64,
    ) -> Result<Vec<Waypoint>, PipelineError> {
        SamplingInterval::try_from(interval_minutes)?;
        let station = self
            .repository
            .station(station_id)?
            .ok_or_else(|| PipelineError::NotFound(format!("station {station_id}")))?;
        self.sample_route(origin, station.location, interval_minutes)
    }

    /// driving distance and time from origin to target
    pub fn calculate_eta(
        &self,
        origin: Point<f64>,
        target: Point<f64>,
    ) -> Result<Eta, PipelineError> {
        validate_point("origin", &origin)?;
        validate_point("target", &target)?;
        let matrix = self.routing.distance_matrix(origin, &[target])?;
        if !matrix.is_aligned(1) {
            return Err(PipelineError::RoutingUnavailable(format!(
                "expected a single matrix cell, found {} durations and {} distances",
                matrix.durations_s.len(),
                matrix.distances_km.len()
            )));
        }
        let (duration, distance) = matrix.get(0).ok_or_else(|| {
            PipelineError::RoutingUnavailable(format!(
                "no route from ({}, {}) to ({}, {})",
                origin.x(),
                origin.y(),
                target.x(),
                target.y()
            ))
        })?;
        Ok(Eta {
            distance_km: feasibility_ops::rounded_distance_km(distance),
            travel_time_min: feasibility_ops::travel_time_minutes(duration),
        })
    }

    /// arrival estimate at the station holding a reservation's charger
    pub fn eta_for_reservation(
        &self,
        origin: Point<f64>,
        reservation_id: ReservationId,
    ) -> Result<Eta, PipelineError> {
        let station = self
            .repository
            .reservation_station(reservation_id)?
            .ok_or_else(|| PipelineError::NotFound(format!("reservation {reservation_id}")))?;
        log::info!(
            "reservation {} is at station {} ({})",
            reservation_id,
            station.station_id,
            station.name
        );
        self.calculate_eta(origin, station.location)
    }
}

fn validate_point(name: &str, point: &Point<f64>) -> Result<(), PipelineError> {
    if geo_utils::is_valid_lon_lat(point) {
        Ok(())
    } else {
        Err(PipelineError::InvalidArgument(format!(
            "{name} ({}, {}) is not a valid (lon, lat) coordinate",
            point.x(),
            point.y()
        )))
    }
}
