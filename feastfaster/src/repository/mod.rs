mod in_memory_station_repository;
mod station_document;

pub use in_memory_station_repository::InMemoryStationRepository;
pub use station_document::StationDocument;
