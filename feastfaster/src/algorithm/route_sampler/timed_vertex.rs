use geo::Point;
use uom::si::f64::{Length, Time};

/// a route polyline vertex stamped with the time and distance traveled to reach it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedVertex {
    /// position of the vertex in the route polyline
    pub index: usize,
    pub lon: f64,
    pub lat: f64,
    /// elapsed since departure
    pub time: Time,
    /// cumulative great-circle distance since departure
    pub distance: Length,
}

impl TimedVertex {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
