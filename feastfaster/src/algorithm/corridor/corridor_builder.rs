use super::{Corridor, CorridorConfig};
use crate::pipeline::PipelineError;
use feastfaster_core::service::RoutingService;
use geo::{BoundingRect, Buffer, LineString, MapCoords, MultiPolygon, Point};
use itertools::Itertools;

/// builds the search corridor around the driving route between two points.
pub struct CorridorBuilder {
    config: CorridorConfig,
}

impl CorridorBuilder {
    pub fn new(config: CorridorConfig) -> CorridorBuilder {
        CorridorBuilder { config }
    }

    /// requests the route geometry from the routing service and buffers it.
    /// any routing failure surfaces as [`PipelineError::RoutingUnavailable`].
    pub fn build(
        &self,
        routing: &dyn RoutingService,
        origin: Point<f64>,
        destination: Point<f64>,
    ) -> Result<Corridor, PipelineError> {
        let route = routing.directions(origin, destination)?;
        let corridor = self.buffer_polyline(&route.geometry)?;
        log::info!(
            "built {}m corridor around {} route vertices ({:.1}km)",
            self.config.half_width_meters,
            route.geometry.0.len(),
            route.distance().get::<uom::si::length::kilometer>()
        );
        log::debug!("corridor: {}", corridor.to_wkt_string());
        Ok(corridor)
    }

    /// buffers a (lon, lat) polyline by the configured half width. the polyline is
    /// projected into planar meters, buffered, and the result projected back.
    pub fn buffer_polyline(&self, polyline: &LineString<f64>) -> Result<Corridor, PipelineError> {
        let n_distinct = polyline.coords().dedup().count();
        if n_distinct < 2 {
            return Err(PipelineError::RoutingUnavailable(format!(
                "route geometry is degenerate, found {n_distinct} distinct vertices"
            )));
        }
        let extent = polyline.bounding_rect().ok_or_else(|| {
            PipelineError::RoutingUnavailable(String::from("route geometry has no extent"))
        })?;

        let frame = self.config.projection.frame(&extent);
        let projected = polyline.map_coords(|c| frame.forward(c));
        let buffered: MultiPolygon<f64> = projected.buffer(self.config.half_width_meters);
        let polygon = buffered.map_coords(|c| frame.inverse(c));

        let bbox = polygon.bounding_rect().ok_or_else(|| {
            PipelineError::RoutingUnavailable(String::from(
                "buffering the route geometry produced an empty corridor",
            ))
        })?;
        Ok(Corridor::new(polygon, bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::StubRouting;
    use feastfaster_core::util::Projection;
    use geo::{line_string, Contains};

    fn denver_route() -> LineString<f64> {
        line_string![
            (x: -105.0, y: 39.7),
            (x: -104.9, y: 39.75),
            (x: -104.8, y: 39.8),
        ]
    }

    fn builder(projection: Projection) -> CorridorBuilder {
        CorridorBuilder::new(CorridorConfig {
            half_width_meters: 5000.0,
            projection,
        })
    }

    #[test]
    fn test_corridor_contains_route() {
        for projection in [Projection::LocalEquirectangular, Projection::WebMercator] {
            let route = denver_route();
            let corridor = builder(projection).buffer_polyline(&route).unwrap();
            let route_bbox = route.bounding_rect().unwrap();
            assert!(corridor.bbox.min().x <= route_bbox.min().x);
            assert!(corridor.bbox.min().y <= route_bbox.min().y);
            assert!(corridor.bbox.max().x >= route_bbox.max().x);
            assert!(corridor.bbox.max().y >= route_bbox.max().y);
            for point in route.points() {
                assert!(corridor.contains_point(&point), "{projection:?}: {point:?}");
            }
            assert!(corridor.polygon.contains(&route), "{projection:?}");
        }
    }

    #[test]
    fn test_corridor_half_width() {
        let corridor = builder(Projection::LocalEquirectangular)
            .buffer_polyline(&denver_route())
            .unwrap();
        // ~2km north of the middle vertex
        assert!(corridor.contains_point(&Point::new(-104.9, 39.768)));
        // ~10km north of the middle vertex, ~8.4km from the route
        assert!(!corridor.contains_point(&Point::new(-104.9, 39.84)));
        // rings are closed
        for polygon in corridor.polygon.iter() {
            assert!(polygon.exterior().is_closed());
        }
    }

    #[test]
    fn test_degenerate_polylines() {
        let b = builder(Projection::default());
        let empty: LineString<f64> = LineString::new(vec![]);
        let single = line_string![(x: -105.0, y: 39.7)];
        let repeated = line_string![(x: -105.0, y: 39.7), (x: -105.0, y: 39.7)];
        for line in [empty, single, repeated] {
            match b.buffer_polyline(&line) {
                Err(PipelineError::RoutingUnavailable(_)) => {}
                other => panic!("expected RoutingUnavailable, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_build_uses_routing_geometry() {
        let routing = StubRouting::with_route(denver_route(), vec![]);
        let corridor = builder(Projection::default())
            .build(&routing, Point::new(-105.0, 39.7), Point::new(-104.8, 39.8))
            .unwrap();
        assert!(corridor.contains_point(&Point::new(-104.9, 39.75)));
        assert_eq!(routing.directions_calls(), 1);
    }

    #[test]
    fn test_build_routing_failure() {
        let routing = StubRouting::failing();
        let result = builder(Projection::default()).build(
            &routing,
            Point::new(-105.0, 39.7),
            Point::new(-104.8, 39.8),
        );
        assert!(matches!(result, Err(PipelineError::RoutingUnavailable(_))));
        assert_eq!(routing.directions_calls(), 1);
    }
}
