use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// WGS84 semi-major axis, used by the spherical web mercator projection
const WEB_MERCATOR_RADIUS_M: f64 = 6_378_137.0;
/// mean earth radius, used by the local tangent-plane projection
const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;
const WEB_MERCATOR_MAX_LAT: f64 = 85.051_128_78;

/// planar projection used when buffering geographic geometries in meters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// equirectangular projection centered on the geometry extent. it is affine in
    /// (lon, lat), so straight geographic segments remain straight, and distances are
    /// preserved near the center of the extent.
    #[default]
    LocalEquirectangular,
    /// spherical web mercator (EPSG:3857). conformal, but scales distances by
    /// 1/cos(lat), so buffers shrink on the ground away from the equator.
    WebMercator,
}

impl Projection {
    /// builds the forward/inverse transform for geometries within this extent
    pub fn frame(&self, extent: &Rect<f64>) -> PlanarFrame {
        match self {
            Projection::LocalEquirectangular => {
                let center = extent.center();
                PlanarFrame::Equirectangular {
                    lon0: center.x,
                    lat0: center.y,
                    cos_lat0: center.y.to_radians().cos(),
                }
            }
            Projection::WebMercator => PlanarFrame::WebMercator,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanarFrame {
    Equirectangular { lon0: f64, lat0: f64, cos_lat0: f64 },
    WebMercator,
}

impl PlanarFrame {
    /// (lon, lat) degrees into planar meters
    pub fn forward(&self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            PlanarFrame::Equirectangular {
                lon0,
                lat0,
                cos_lat0,
            } => Coord {
                x: MEAN_EARTH_RADIUS_M * (coord.x - lon0).to_radians() * cos_lat0,
                y: MEAN_EARTH_RADIUS_M * (coord.y - lat0).to_radians(),
            },
            PlanarFrame::WebMercator => {
                let lat = coord
                    .y
                    .clamp(-WEB_MERCATOR_MAX_LAT, WEB_MERCATOR_MAX_LAT)
                    .to_radians();
                Coord {
                    x: WEB_MERCATOR_RADIUS_M * coord.x.to_radians(),
                    y: WEB_MERCATOR_RADIUS_M
                        * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln(),
                }
            }
        }
    }

    /// planar meters back into (lon, lat) degrees
    pub fn inverse(&self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            PlanarFrame::Equirectangular {
                lon0,
                lat0,
                cos_lat0,
            } => Coord {
                x: lon0 + (coord.x / (MEAN_EARTH_RADIUS_M * cos_lat0)).to_degrees(),
                y: lat0 + (coord.y / MEAN_EARTH_RADIUS_M).to_degrees(),
            },
            PlanarFrame::WebMercator => Coord {
                x: (coord.x / WEB_MERCATOR_RADIUS_M).to_degrees(),
                y: (2.0 * (coord.y / WEB_MERCATOR_RADIUS_M).exp().atan()
                    - std::f64::consts::FRAC_PI_2)
                    .to_degrees(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn denver_extent() -> Rect<f64> {
        Rect::new(
            coord! { x: -105.3, y: 39.6 },
            coord! { x: -104.8, y: 39.9 },
        )
    }

    #[test]
    fn test_round_trip_both_projections() {
        let input = coord! { x: -105.01, y: 39.75 };
        for projection in [Projection::LocalEquirectangular, Projection::WebMercator] {
            let frame = projection.frame(&denver_extent());
            let result = frame.inverse(frame.forward(input));
            assert!((result.x - input.x).abs() < 1e-9, "{projection:?}");
            assert!((result.y - input.y).abs() < 1e-9, "{projection:?}");
        }
    }

    #[test]
    fn test_equirectangular_preserves_meridian_distance() {
        let frame = Projection::LocalEquirectangular.frame(&denver_extent());
        let a = frame.forward(coord! { x: -105.05, y: 39.7 });
        let b = frame.forward(coord! { x: -105.05, y: 39.8 });
        let meters = (b.y - a.y).abs();
        // 0.1 degree of latitude is roughly 11.12km
        assert!((meters - 11_119.5).abs() < 5.0, "found {meters}");
    }

    #[test]
    fn test_web_mercator_origin() {
        let frame = Projection::WebMercator.frame(&denver_extent());
        let result = frame.forward(coord! { x: 0.0, y: 0.0 });
        assert!(result.x.abs() < 1e-9);
        assert!(result.y.abs() < 1e-9);
    }
}
