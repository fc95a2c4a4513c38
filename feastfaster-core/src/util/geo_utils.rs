use geo::{Distance, Haversine, Point, Rect};
use rstar::AABB;
use uom::si::f64::Length;

/// great-circle distance between two WGS84 points.
pub fn haversine_distance(src: Point<f64>, dst: Point<f64>) -> Length {
    Length::new::<uom::si::length::meter>(Haversine.distance(src, dst))
}

/// rounds a value to a fixed number of decimal places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// true if the point is a valid (lon, lat) pair in degrees
pub fn is_valid_lon_lat(point: &Point<f64>) -> bool {
    let (lon, lat) = point.x_y();
    lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat)
}

/// creates an rtree envelope from a bounding rectangle in (lon, lat) coordinates
pub fn rect_to_envelope(rect: &Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y])
}

pub fn point_to_array(point: &Point<f64>) -> [f64; 2] {
    [point.x(), point.y()]
}
