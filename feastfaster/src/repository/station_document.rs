use feastfaster_core::{
    model::{Reservation, Station},
    service::RepositoryError,
};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// on-disk station data: hydrated stations and the reservations against their
/// chargers.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StationDocument {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl StationDocument {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<StationDocument, RepositoryError> {
        let filename = path.as_ref().to_string_lossy().to_string();
        let file = File::open(path.as_ref())
            .map_err(|e| RepositoryError::ReadError(filename.clone(), e.to_string()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| RepositoryError::ReadError(filename, e.to_string()))
    }
}
