mod charge_time_predictor;
mod repository_error;
mod routing_error;
mod routing_service;
mod scoring_error;
mod station_repository;

pub use charge_time_predictor::ChargeTimePredictor;
pub use repository_error::RepositoryError;
pub use routing_error::RoutingError;
pub use routing_service::RoutingService;
pub use scoring_error::ScoringError;
pub use station_repository::StationRepository;
