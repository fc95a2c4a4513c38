use geo::{Intersects, MultiPolygon, Point, Rect};
use wkt::ToWkt;

/// buffered polygon around a route in (lon, lat). a coarse containment filter,
/// not a reachability test.
#[derive(Clone, Debug, PartialEq)]
pub struct Corridor {
    pub polygon: MultiPolygon<f64>,
    /// envelope of `polygon`
    pub bbox: Rect<f64>,
}

impl Corridor {
    pub fn new(polygon: MultiPolygon<f64>, bbox: Rect<f64>) -> Corridor {
        Corridor { polygon, bbox }
    }

    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        self.bbox.intersects(point) && self.polygon.intersects(point)
    }

    pub fn to_wkt_string(&self) -> String {
        self.polygon.wkt_string()
    }
}
