use super::RoutingError;
use crate::model::{DistanceMatrix, Route};
use geo::Point;

/// driving directions and distance matrices from a routing provider.
/// coordinates are (lon, lat). implementations apply their own request timeout
/// and do not retry.
pub trait RoutingService: Send + Sync {
    /// route geometry and steps from origin to destination
    fn directions(&self, origin: Point<f64>, destination: Point<f64>)
        -> Result<Route, RoutingError>;

    /// travel duration and distance from origin to each destination, index-aligned
    /// with `destinations`
    fn distance_matrix(
        &self,
        origin: Point<f64>,
        destinations: &[Point<f64>],
    ) -> Result<DistanceMatrix, RoutingError>;
}
