use super::AppError;
use crate::{
    config::FeastFasterConfig, pipeline::FeastFasterPipeline, predictor::EnergyBalancePredictor,
    repository::InMemoryStationRepository, service::RetryingRoutingService,
};
use feastfaster_core::service::{ChargeTimePredictor, RoutingService, StationRepository};
use feastfaster_ors::OrsClient;
use std::sync::Arc;

/// collaborators an operation reads beyond the routing service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    /// loads the configured station document
    pub stations: bool,
    /// builds the configured charging time predictor
    pub scoring: bool,
}

/// builds the collaborators an operation needs from configuration and wires
/// them into a pipeline. collaborators outside `requirements` are replaced by
/// an empty station repository and the bundled vehicle table, so operations
/// that only route do not need a stations file. runs once at startup.
pub fn build_pipeline(
    config: &FeastFasterConfig,
    requirements: Requirements,
) -> Result<FeastFasterPipeline, AppError> {
    let ors = OrsClient::new(config.routing.ors_config())?;
    let routing: Arc<dyn RoutingService> = if config.routing.max_retries > 0 {
        Arc::new(RetryingRoutingService::new(
            Arc::new(ors),
            config.routing.max_retries,
            config.routing.retry_backoff(),
        ))
    } else {
        Arc::new(ors)
    };

    let repository: Arc<dyn StationRepository> = if requirements.stations {
        let stations_file = config.repository.stations_file.as_ref().ok_or_else(|| {
            AppError::MissingArgument(String::from(
                "repository.stations_file must be set (or FEASTFASTER__REPOSITORY__STATIONS_FILE)",
            ))
        })?;
        Arc::new(InMemoryStationRepository::from_file(stations_file)?)
    } else {
        Arc::new(InMemoryStationRepository::new(vec![], vec![])?)
    };
    let predictor: Arc<dyn ChargeTimePredictor> = if requirements.scoring {
        config.charging.predictor.build()?
    } else {
        Arc::new(EnergyBalancePredictor::bundled()?)
    };

    Ok(FeastFasterPipeline::new(
        routing,
        repository,
        predictor,
        config.corridor.clone(),
        config.feasibility.clone(),
        config.charging.ambient_temperature,
    ))
}
