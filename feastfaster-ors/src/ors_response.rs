use feastfaster_core::{
    model::{DistanceMatrix, Route, RouteStep},
    service::RoutingError,
};
use geo::{Coord, LineString};
use serde::Deserialize;
use uom::si::f64::Length;

#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

#[derive(Deserialize, Debug)]
pub struct RouteFeature {
    pub properties: RouteProperties,
    pub geometry: RouteGeometry,
}

#[derive(Deserialize, Debug)]
pub struct RouteProperties {
    #[serde(default)]
    pub segments: Vec<RouteSegment>,
    #[serde(default)]
    pub summary: RouteSummary,
}

/// route totals. ORS omits both fields for zero-length routes.
#[derive(Deserialize, Debug, Default)]
pub struct RouteSummary {
    /// meters
    #[serde(default)]
    pub distance: f64,
    /// seconds
    #[serde(default)]
    pub duration: f64,
}

#[derive(Deserialize, Debug)]
pub struct RouteSegment {
    #[serde(default)]
    pub steps: Vec<RouteSegmentStep>,
}

#[derive(Deserialize, Debug)]
pub struct RouteSegmentStep {
    #[serde(default)]
    pub duration: f64,
    pub way_points: [usize; 2],
}

#[derive(Deserialize, Debug)]
pub struct RouteGeometry {
    /// positions may carry a third elevation value, which is ignored
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Deserialize, Debug)]
pub struct MatrixResponse {
    #[serde(default)]
    pub durations: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub distances: Vec<Vec<Option<f64>>>,
}

impl TryFrom<DirectionsResponse> for Route {
    type Error = RoutingError;

    fn try_from(response: DirectionsResponse) -> Result<Self, Self::Error> {
        let feature = response.features.into_iter().next().ok_or_else(|| {
            RoutingError::MalformedResponse(String::from("directions response has no features"))
        })?;

        let coords = feature
            .geometry
            .coordinates
            .iter()
            .enumerate()
            .map(|(idx, position)| match position.as_slice() {
                [x, y, ..] => Ok(Coord { x: *x, y: *y }),
                _ => Err(RoutingError::MalformedResponse(format!(
                    "route position {idx} has fewer than two ordinates"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if coords.is_empty() {
            return Err(RoutingError::DegenerateRoute(String::from(
                "route geometry is empty",
            )));
        }

        let steps = feature
            .properties
            .segments
            .iter()
            .flat_map(|segment| segment.steps.iter())
            .map(|step| RouteStep::new(step.duration, step.way_points[0], step.way_points[1]))
            .collect::<Vec<_>>();

        Ok(Route {
            geometry: LineString::new(coords),
            steps,
            distance_km: Length::new::<uom::si::length::meter>(feature.properties.summary.distance)
                .get::<uom::si::length::kilometer>(),
            duration_s: feature.properties.summary.duration,
        })
    }
}

impl MatrixResponse {
    /// reads the single source row of a one-to-many matrix
    pub fn into_distance_matrix(self) -> Result<DistanceMatrix, RoutingError> {
        let durations_s = self.durations.into_iter().next().ok_or_else(|| {
            RoutingError::MalformedResponse(String::from("matrix response has no durations"))
        })?;
        let distances_km = self.distances.into_iter().next().ok_or_else(|| {
            RoutingError::MalformedResponse(String::from("matrix response has no distances"))
        })?;
        Ok(DistanceMatrix {
            durations_s,
            distances_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::{f64::Time, length::kilometer, time::second};

    const DIRECTIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [{
                    "distance": 1800.2,
                    "duration": 300.0,
                    "steps": [
                        {"distance": 1000.0, "duration": 180.0, "type": 11, "instruction": "Head north", "way_points": [0, 2]},
                        {"distance": 800.2, "duration": 120.0, "type": 1, "instruction": "Turn right", "way_points": [2, 3]},
                        {"distance": 0.0, "duration": 0.0, "type": 10, "instruction": "Arrive", "way_points": [3, 3]}
                    ]
                }],
                "summary": {"distance": 1800.2, "duration": 300.0},
                "way_points": [0, 3]
            },
            "geometry": {
                "coordinates": [[8.681, 49.414], [8.682, 49.416], [8.683, 49.418], [8.687, 49.419]],
                "type": "LineString"
            }
        }]
    }"#;

    #[test]
    fn test_directions_into_route() {
        let response: DirectionsResponse = serde_json::from_str(DIRECTIONS).unwrap();
        let route = Route::try_from(response).unwrap();
        assert_eq!(route.geometry.0.len(), 4);
        assert_eq!(route.geometry.0[3], Coord { x: 8.687, y: 49.419 });
        assert_eq!(route.steps.len(), 3);
        assert_eq!(route.steps[1], RouteStep::new(120.0, 2, 3));
        assert!((route.distance_km - 1.8002).abs() < 1e-9);
        assert_eq!(route.duration_s, 300.0);
    }

    #[test]
    fn test_directions_without_features_is_malformed() {
        let response: DirectionsResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
        let result = Route::try_from(response);
        assert!(matches!(result, Err(RoutingError::MalformedResponse(_))));
    }

    #[test]
    fn test_directions_with_empty_geometry_is_degenerate() {
        let json = r#"{"features": [{"properties": {"segments": [], "summary": {}},
                       "geometry": {"coordinates": []}}]}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let result = Route::try_from(response);
        assert!(matches!(result, Err(RoutingError::DegenerateRoute(_))));
    }

    #[test]
    fn test_matrix_with_unreachable_destination() {
        let json = r#"{
            "durations": [[600.5, null, 1200.0]],
            "distances": [[10.12, null, 22.5]],
            "destinations": [], "sources": [], "metadata": {}
        }"#;
        let response: MatrixResponse = serde_json::from_str(json).unwrap();
        let matrix = response.into_distance_matrix().unwrap();
        assert!(matrix.is_aligned(3));
        assert_eq!(matrix.get(0), Some((Time::new::<second>(600.5), Length::new::<kilometer>(10.12))));
        assert_eq!(matrix.get(1), None);
        assert_eq!(matrix.get(2), Some((Time::new::<second>(1200.0), Length::new::<kilometer>(22.5))));
    }

    #[test]
    fn test_matrix_without_rows_is_malformed() {
        let response: MatrixResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_distance_matrix(),
            Err(RoutingError::MalformedResponse(_))
        ));
    }
}
