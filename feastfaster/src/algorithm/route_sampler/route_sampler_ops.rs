use super::{expand_route, SamplingInterval, TimedVertex};
use crate::pipeline::PipelineError;
use feastfaster_core::{
    model::{Route, Waypoint},
    util::geo_utils,
};

/// emits one waypoint every `interval` along an expanded route, starting at
/// departure. each waypoint is the first vertex reached at or after its
/// target time; positions are not interpolated between vertices.
pub fn sample(expanded: &[TimedVertex], interval: SamplingInterval) -> Vec<Waypoint> {
    let Some(last) = expanded.last() else {
        return vec![];
    };
    let mut waypoints = vec![];
    let mut ptr = 0;
    let mut k: u64 = 0;
    loop {
        let target = interval.duration() * k as f64;
        if target > last.time {
            break;
        }
        let Some(time_min) = k.checked_mul(interval.minutes()) else {
            break;
        };
        while ptr < expanded.len() - 1 && expanded[ptr].time < target {
            ptr += 1;
        }
        let vertex = &expanded[ptr];
        let distance_km = vertex.distance.get::<uom::si::length::kilometer>();
        waypoints.push(Waypoint {
            lat: vertex.lat,
            lon: vertex.lon,
            time_min,
            distance_km: geo_utils::round_to(distance_km, 3),
        });
        k += 1;
    }
    waypoints
}

/// resamples routes into evenly time-spaced waypoints.
#[derive(Clone, Copy, Debug)]
pub struct RouteSampler {
    interval: SamplingInterval,
}

impl RouteSampler {
    pub fn new(interval: SamplingInterval) -> RouteSampler {
        RouteSampler { interval }
    }

    pub fn sample_route(&self, route: &Route) -> Result<Vec<Waypoint>, PipelineError> {
        let expanded = expand_route(route)?;
        let waypoints = sample(&expanded, self.interval);
        log::info!(
            "sampled {} waypoints every {} from {} route vertices ({:.1} min)",
            waypoints.len(),
            self.interval,
            expanded.len(),
            route.duration().get::<uom::si::time::minute>()
        );
        Ok(waypoints)
    }
}
