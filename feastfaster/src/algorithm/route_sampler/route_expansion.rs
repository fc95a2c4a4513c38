use super::TimedVertex;
use crate::pipeline::PipelineError;
use feastfaster_core::{model::Route, util::geo_utils};
use uom::si::f64::{Length, Time};

/// expands the route steps into one time-stamped vertex sequence.
///
/// each step spreads its duration evenly across its vertices, so time is
/// uniform per vertex within a step, not per kilometer. a step with a single
/// vertex places that vertex at the step's start time. the boundary vertex
/// shared by adjacent steps appears once. cumulative distance is the haversine
/// length of the polyline up to each vertex.
pub fn expand_route(route: &Route) -> Result<Vec<TimedVertex>, PipelineError> {
    if route.steps.is_empty() {
        return Err(PipelineError::RoutingUnavailable(String::from(
            "route has no steps to sample",
        )));
    }
    let n_coords = route.geometry.0.len();
    let mut expanded: Vec<TimedVertex> = Vec::with_capacity(n_coords);
    let mut step_start = Time::new::<uom::si::time::second>(0.0);
    for (step_index, step) in route.steps.iter().enumerate() {
        if step.start > step.end || step.end >= n_coords {
            return Err(PipelineError::RoutingUnavailable(format!(
                "step {step_index} spans vertices {}..={} of a {n_coords} vertex route",
                step.start, step.end
            )));
        }
        if !step.duration_s.is_finite() || step.duration_s < 0.0 {
            return Err(PipelineError::RoutingUnavailable(format!(
                "step {step_index} has invalid duration {}",
                step.duration_s
            )));
        }
        let segments = step.end - step.start;
        let step_duration = step.duration();
        let step_end = step_start + step_duration;
        for (offset, index) in step.vertex_range().enumerate() {
            if expanded.last().map(|v| v.index) == Some(index) {
                continue;
            }
            let time = if segments == 0 {
                step_start
            } else if offset == segments {
                step_end
            } else {
                step_start + step_duration * (offset as f64 / segments as f64)
            };
            let coord = route.geometry.0[index];
            let distance = match expanded.last() {
                Some(prev) => {
                    prev.distance + geo_utils::haversine_distance(prev.point(), coord.into())
                }
                None => Length::new::<uom::si::length::meter>(0.0),
            };
            expanded.push(TimedVertex {
                index,
                lon: coord.x,
                lat: coord.y,
                time,
                distance,
            });
        }
        step_start = step_end;
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feastfaster_core::model::RouteStep;
    use geo::line_string;

    fn route(steps: Vec<RouteStep>) -> Route {
        Route {
            geometry: line_string![
                (x: 0.0, y: 0.0),
                (x: 0.0, y: 0.01),
                (x: 0.0, y: 0.02),
                (x: 0.0, y: 0.03),
                (x: 0.0, y: 0.04),
            ],
            steps,
            distance_km: 4.4,
            duration_s: 400.0,
        }
    }

    #[test]
    fn test_time_is_spread_evenly_within_steps() {
        let expanded = expand_route(&route(vec![
            RouteStep::new(100.0, 0, 2),
            RouteStep::new(300.0, 2, 4),
        ]))
        .unwrap();
        let indices = expanded.iter().map(|v| v.index).collect::<Vec<_>>();
        let times = expanded
            .iter()
            .map(|v| v.time.get::<uom::si::time::second>())
            .collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(times, vec![0.0, 50.0, 100.0, 250.0, 400.0]);
    }

    #[test]
    fn test_distance_accumulates_haversine() {
        let expanded = expand_route(&route(vec![RouteStep::new(400.0, 0, 4)])).unwrap();
        let km = |v: &TimedVertex| v.distance.get::<uom::si::length::kilometer>();
        assert_eq!(km(&expanded[0]), 0.0);
        // 0.01 degrees of latitude is ~1.112km
        let last = km(&expanded[4]);
        assert!((last - 4.448).abs() < 0.01, "found {last}");
        for pair in expanded.windows(2) {
            assert!(pair[1].distance >= pair[0].distance);
        }
    }

    #[test]
    fn test_single_vertex_step() {
        let expanded = expand_route(&route(vec![
            RouteStep::new(120.0, 0, 1),
            RouteStep::new(0.0, 1, 1),
        ]))
        .unwrap();
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[1].time.get::<uom::si::time::second>(), 120.0);
    }

    #[test]
    fn test_malformed_steps() {
        let out_of_range = route(vec![RouteStep::new(100.0, 0, 9)]);
        let reversed = route(vec![RouteStep::new(100.0, 3, 1)]);
        let negative = route(vec![RouteStep::new(-1.0, 0, 1)]);
        let empty = route(vec![]);
        for r in [out_of_range, reversed, negative, empty] {
            let result = expand_route(&r);
            assert!(matches!(result, Err(PipelineError::RoutingUnavailable(_))));
        }
    }
}
