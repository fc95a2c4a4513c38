//! serde helpers writing a [`Point`] as a `[lon, lat]` pair, matching the
//! coordinate order used by routing providers and GeoJSON.
use geo::Point;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(point: &Point<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    point.x_y().serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Point<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let (lon, lat) = <(f64, f64)>::deserialize(deserializer)?;
    Ok(Point::new(lon, lat))
}
