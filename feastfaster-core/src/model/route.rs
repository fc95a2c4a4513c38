use geo::LineString;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uom::si::f64::{Length, Time};

/// a routing-provider segment covering `start..=end` of the shared route polyline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteStep {
    pub duration_s: f64,
    pub start: usize,
    pub end: usize,
}

impl RouteStep {
    pub fn new(duration_s: f64, start: usize, end: usize) -> RouteStep {
        RouteStep {
            duration_s,
            start,
            end,
        }
    }

    pub fn duration(&self) -> Time {
        Time::new::<uom::si::time::second>(self.duration_s)
    }

    pub fn vertex_range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// route geometry in (lon, lat) with its step breakdown
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    pub geometry: LineString<f64>,
    pub steps: Vec<RouteStep>,
    pub distance_km: f64,
    pub duration_s: f64,
}

impl Route {
    pub fn distance(&self) -> Length {
        Length::new::<uom::si::length::kilometer>(self.distance_km)
    }

    pub fn duration(&self) -> Time {
        Time::new::<uom::si::time::second>(self.duration_s)
    }
}
