use geo::Point;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct DirectionsRequest {
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    pub fn new(origin: Point<f64>, destination: Point<f64>) -> DirectionsRequest {
        DirectionsRequest {
            coordinates: vec![[origin.x(), origin.y()], [destination.x(), destination.y()]],
        }
    }
}

/// one-to-many matrix request: location 0 is the only source, every other
/// location is a destination.
#[derive(Serialize, Debug)]
pub struct MatrixRequest {
    pub locations: Vec<[f64; 2]>,
    pub sources: Vec<usize>,
    pub destinations: Vec<usize>,
    pub metrics: Vec<&'static str>,
    pub units: &'static str,
}

impl MatrixRequest {
    pub fn one_to_many(origin: Point<f64>, destinations: &[Point<f64>]) -> MatrixRequest {
        let locations = std::iter::once(origin)
            .chain(destinations.iter().copied())
            .map(|p| [p.x(), p.y()])
            .collect();
        MatrixRequest {
            locations,
            sources: vec![0],
            destinations: (1..=destinations.len()).collect(),
            metrics: vec!["duration", "distance"],
            units: "km",
        }
    }
}
