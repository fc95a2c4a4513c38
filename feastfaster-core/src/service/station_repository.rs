use super::RepositoryError;
use crate::model::{ReservationId, Station, StationId};
use geo::{MultiPolygon, Rect};

/// read access to hydrated stations. spatial filtering is pushed down to the
/// repository so it can use whatever index it holds.
pub trait StationRepository: Send + Sync {
    /// stations whose location intersects the corridor. `bbox` is the corridor
    /// envelope, used as a cheap prefilter before the exact test.
    fn query(
        &self,
        corridor: &MultiPolygon<f64>,
        bbox: &Rect<f64>,
    ) -> Result<Vec<Station>, RepositoryError>;

    fn station(&self, station_id: StationId) -> Result<Option<Station>, RepositoryError>;

    /// the station holding the charger that this reservation binds to
    fn reservation_station(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Option<Station>, RepositoryError>;
}
