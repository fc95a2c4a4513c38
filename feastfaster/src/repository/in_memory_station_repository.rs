use super::StationDocument;
use feastfaster_core::{
    model::{ChargerId, Reservation, ReservationId, Station, StationId},
    service::{RepositoryError, StationRepository},
    util::geo_utils,
};
use geo::{Intersects, MultiPolygon, Rect};
use rstar::{primitives::GeomWithData, RTree};
use std::{collections::HashMap, path::Path};

type StationNode = GeomWithData<[f64; 2], usize>;

/// station repository held in memory. station locations are indexed in an
/// R-tree for the envelope prefilter; the exact corridor test runs on the
/// prefiltered set.
pub struct InMemoryStationRepository {
    stations: Vec<Station>,
    rtree: RTree<StationNode>,
    station_index: HashMap<StationId, usize>,
    charger_station: HashMap<ChargerId, usize>,
    reservations: HashMap<ReservationId, ChargerId>,
}

impl InMemoryStationRepository {
    pub fn new(
        stations: Vec<Station>,
        reservations: Vec<Reservation>,
    ) -> Result<InMemoryStationRepository, RepositoryError> {
        let mut station_index = HashMap::with_capacity(stations.len());
        let mut charger_station = HashMap::new();
        for (index, station) in stations.iter().enumerate() {
            validate_station(station)?;
            if station_index.insert(station.station_id, index).is_some() {
                return Err(RepositoryError::InvalidData(format!(
                    "duplicate station id {}",
                    station.station_id
                )));
            }
            for charger in station.chargers.iter() {
                if charger_station.insert(charger.charger_id, index).is_some() {
                    return Err(RepositoryError::InvalidData(format!(
                        "duplicate charger id {}",
                        charger.charger_id
                    )));
                }
            }
        }

        let mut reservation_index = HashMap::with_capacity(reservations.len());
        for reservation in reservations.iter() {
            if !charger_station.contains_key(&reservation.charger_id) {
                return Err(RepositoryError::InvalidData(format!(
                    "reservation {} refers to unknown charger {}",
                    reservation.reservation_id, reservation.charger_id
                )));
            }
            reservation_index.insert(reservation.reservation_id, reservation.charger_id);
        }

        let nodes = stations
            .iter()
            .enumerate()
            .map(|(index, s)| GeomWithData::new(geo_utils::point_to_array(&s.location), index))
            .collect::<Vec<_>>();
        let rtree = RTree::bulk_load(nodes);

        Ok(InMemoryStationRepository {
            stations,
            rtree,
            station_index,
            charger_station,
            reservations: reservation_index,
        })
    }

    /// loads a JSON [`StationDocument`] from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<InMemoryStationRepository, RepositoryError> {
        let document = StationDocument::read(path.as_ref())?;
        let repository = Self::new(document.stations, document.reservations)?;
        log::info!(
            "loaded {} stations and {} reservations from {}",
            repository.len(),
            repository.reservations.len(),
            path.as_ref().display()
        );
        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl TryFrom<StationDocument> for InMemoryStationRepository {
    type Error = RepositoryError;

    fn try_from(document: StationDocument) -> Result<Self, Self::Error> {
        Self::new(document.stations, document.reservations)
    }
}

impl StationRepository for InMemoryStationRepository {
    fn query(
        &self,
        corridor: &MultiPolygon<f64>,
        bbox: &Rect<f64>,
    ) -> Result<Vec<Station>, RepositoryError> {
        let envelope = geo_utils::rect_to_envelope(bbox);
        let mut indices = self
            .rtree
            .locate_in_envelope(&envelope)
            .map(|node| node.data)
            .filter(|index| corridor.intersects(&self.stations[*index].location))
            .collect::<Vec<_>>();
        // the tree iterates in node order, keep results in load order
        indices.sort_unstable();
        log::debug!(
            "{} stations inside corridor envelope {:?}",
            indices.len(),
            envelope
        );
        Ok(indices
            .into_iter()
            .map(|index| self.stations[index].clone())
            .collect())
    }

    fn station(&self, station_id: StationId) -> Result<Option<Station>, RepositoryError> {
        Ok(self
            .station_index
            .get(&station_id)
            .map(|index| self.stations[*index].clone()))
    }

    fn reservation_station(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Option<Station>, RepositoryError> {
        let Some(charger_id) = self.reservations.get(&reservation_id) else {
            return Ok(None);
        };
        let index = self.charger_station.get(charger_id).ok_or_else(|| {
            RepositoryError::InternalError(format!(
                "charger {charger_id} of reservation {reservation_id} is not indexed"
            ))
        })?;
        Ok(Some(self.stations[*index].clone()))
    }
}

fn validate_station(station: &Station) -> Result<(), RepositoryError> {
    if !geo_utils::is_valid_lon_lat(&station.location) {
        return Err(RepositoryError::InvalidData(format!(
            "station {} has invalid location ({}, {})",
            station.station_id,
            station.location.x(),
            station.location.y()
        )));
    }
    let foreign_restaurant = station
        .restaurants
        .iter()
        .find(|r| r.station_id != station.station_id);
    if let Some(r) = foreign_restaurant {
        return Err(RepositoryError::InvalidData(format!(
            "restaurant {} listed under station {} belongs to station {}",
            r.restaurant_id, station.station_id, r.station_id
        )));
    }
    let foreign_charger = station
        .chargers
        .iter()
        .find(|c| c.station_id != station.station_id);
    if let Some(c) = foreign_charger {
        return Err(RepositoryError::InvalidData(format!(
            "charger {} listed under station {} belongs to station {}",
            c.charger_id, station.station_id, c.station_id
        )));
    }
    Ok(())
}
