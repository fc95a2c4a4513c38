mod charging_config;
mod configuration_error;
mod feastfaster_config;
mod repository_config;
mod routing_config;

pub use charging_config::ChargingConfig;
pub use configuration_error::ConfigurationError;
pub use feastfaster_config::FeastFasterConfig;
pub use repository_config::RepositoryConfig;
pub use routing_config::RoutingConfig;
