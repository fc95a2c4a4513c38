//! deterministic collaborators and fixtures shared by unit tests.
use feastfaster_core::{
    model::{
        Candidate, ChargeFeatures, Charger, ChargerId, ChargerStatus, DistanceMatrix, Restaurant,
        RestaurantId, Route, RouteStep, Station, StationId,
    },
    service::{ChargeTimePredictor, RoutingError, RoutingService, ScoringError},
    util::geo_utils,
};
use geo::{LineString, Point};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// routing service answering with canned responses and counting calls.
/// a missing response is reported as a transport failure.
pub struct StubRouting {
    route: Option<Route>,
    matrix: Option<DistanceMatrix>,
    directions_calls: AtomicUsize,
    matrix_calls: AtomicUsize,
}

impl StubRouting {
    pub fn new(route: Option<Route>, matrix: Option<DistanceMatrix>) -> StubRouting {
        StubRouting {
            route,
            matrix,
            directions_calls: AtomicUsize::new(0),
            matrix_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_route(geometry: LineString<f64>, steps: Vec<RouteStep>) -> StubRouting {
        Self::new(Some(route(geometry, steps)), None)
    }

    pub fn with_matrix(matrix: DistanceMatrix) -> StubRouting {
        Self::new(None, Some(matrix))
    }

    pub fn failing() -> StubRouting {
        Self::new(None, None)
    }

    pub fn directions_calls(&self) -> usize {
        self.directions_calls.load(Ordering::SeqCst)
    }

    pub fn matrix_calls(&self) -> usize {
        self.matrix_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.directions_calls() + self.matrix_calls()
    }
}

impl RoutingService for StubRouting {
    fn directions(
        &self,
        _origin: Point<f64>,
        _destination: Point<f64>,
    ) -> Result<Route, RoutingError> {
        self.directions_calls.fetch_add(1, Ordering::SeqCst);
        self.route
            .clone()
            .ok_or_else(|| RoutingError::Transport(String::from("stub has no route")))
    }

    fn distance_matrix(
        &self,
        _origin: Point<f64>,
        _destinations: &[Point<f64>],
    ) -> Result<DistanceMatrix, RoutingError> {
        self.matrix_calls.fetch_add(1, Ordering::SeqCst);
        self.matrix
            .clone()
            .ok_or_else(|| RoutingError::Transport(String::from("stub has no matrix")))
    }
}

/// builds a route whose duration is the sum of its step durations
pub fn route(geometry: LineString<f64>, steps: Vec<RouteStep>) -> Route {
    let distance_km = geometry
        .points()
        .zip(geometry.points().skip(1))
        .map(|(a, b)| geo_utils::haversine_distance(a, b).get::<uom::si::length::kilometer>())
        .sum::<f64>();
    let duration_s = steps.iter().map(|s| s.duration_s).sum::<f64>();
    Route {
        geometry,
        steps,
        distance_km,
        duration_s,
    }
}

/// scorer returning the same predictions for every batch
pub struct FixedPredictor {
    predictions: Option<Vec<f64>>,
    batches: Mutex<Vec<Vec<ChargeFeatures>>>,
}

impl FixedPredictor {
    pub fn new(predictions: Vec<f64>) -> FixedPredictor {
        FixedPredictor {
            predictions: Some(predictions),
            batches: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> FixedPredictor {
        FixedPredictor {
            predictions: None,
            batches: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn batches(&self) -> Vec<Vec<ChargeFeatures>> {
        self.batches.lock().unwrap().clone()
    }
}

impl ChargeTimePredictor for FixedPredictor {
    fn predict(&self, features: &[ChargeFeatures]) -> Result<Vec<f64>, ScoringError> {
        self.batches.lock().unwrap().push(features.to_vec());
        self.predictions
            .clone()
            .ok_or_else(|| ScoringError::ModelError(String::from("stub model is offline")))
    }
}

/// a station with one restaurant serving `cuisines` and one available 50kW charger.
/// the restaurant and charger share the station's id.
pub fn station(id: i64, location: Point<f64>, cuisines: &[&str], connector_type: &str) -> Station {
    Station {
        station_id: StationId(id),
        name: format!("station {id}"),
        address: format!("{id} main st"),
        location,
        restaurants: vec![restaurant(id, id, cuisines)],
        chargers: vec![charger(id, id, connector_type, 50.0, ChargerStatus::Available)],
    }
}

pub fn restaurant(restaurant_id: i64, station_id: i64, cuisines: &[&str]) -> Restaurant {
    Restaurant {
        restaurant_id: RestaurantId(restaurant_id),
        station_id: StationId(station_id),
        name: format!("restaurant {restaurant_id}"),
        address: format!("{station_id} main st"),
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn charger(
    charger_id: i64,
    station_id: i64,
    connector_type: &str,
    power_kw: f64,
    status: ChargerStatus,
) -> Charger {
    Charger {
        charger_id: ChargerId(charger_id),
        station_id: StationId(station_id),
        connector_type: connector_type.to_string(),
        power_kw,
        status,
    }
}

/// a candidate carrying every restaurant and charger of the station
pub fn candidate(station: Station) -> Candidate {
    Candidate {
        station_id: station.station_id,
        name: station.name,
        address: station.address,
        location: station.location,
        restaurants: station.restaurants,
        chargers: station.chargers,
    }
}
