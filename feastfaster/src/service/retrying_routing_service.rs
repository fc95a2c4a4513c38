use feastfaster_core::{
    model::{DistanceMatrix, Route},
    service::{RoutingError, RoutingService},
};
use geo::Point;
use std::{sync::Arc, thread, time::Duration};

/// wraps a routing service with a bounded number of retries. only transient
/// failures are retried; the wait grows linearly with each attempt.
pub struct RetryingRoutingService {
    inner: Arc<dyn RoutingService>,
    max_retries: u32,
    backoff: Duration,
}

impl RetryingRoutingService {
    pub fn new(
        inner: Arc<dyn RoutingService>,
        max_retries: u32,
        backoff: Duration,
    ) -> RetryingRoutingService {
        RetryingRoutingService {
            inner,
            max_retries,
            backoff,
        }
    }

    fn with_retries<T>(
        &self,
        operation: &str,
        call: impl Fn(&dyn RoutingService) -> Result<T, RoutingError>,
    ) -> Result<T, RoutingError> {
        let mut attempt = 0;
        loop {
            match call(self.inner.as_ref()) {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let wait = self.backoff * attempt;
                    log::warn!(
                        "{operation} failed ({e}), retry {attempt}/{} in {}ms",
                        self.max_retries,
                        wait.as_millis()
                    );
                    thread::sleep(wait);
                }
                result => return result,
            }
        }
    }
}

impl RoutingService for RetryingRoutingService {
    fn directions(
        &self,
        origin: Point<f64>,
        destination: Point<f64>,
    ) -> Result<Route, RoutingError> {
        self.with_retries("directions", |r| r.directions(origin, destination))
    }

    fn distance_matrix(
        &self,
        origin: Point<f64>,
        destinations: &[Point<f64>],
    ) -> Result<DistanceMatrix, RoutingError> {
        self.with_retries("distance matrix", |r| {
            r.distance_matrix(origin, destinations)
        })
    }
}
