use super::{ChargingConfig, ConfigurationError, RepositoryConfig, RoutingConfig};
use crate::algorithm::{corridor::CorridorConfig, feasibility::FeasibilityConfig};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// prefix of environment variable overrides, such as `FEASTFASTER__ROUTING__API_KEY`
pub const ENV_PREFIX: &str = "FEASTFASTER";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FeastFasterConfig {
    #[serde(default)]
    pub corridor: CorridorConfig,
    #[serde(default)]
    pub feasibility: FeasibilityConfig,
    #[serde(default)]
    pub charging: ChargingConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

impl FeastFasterConfig {
    /// built-in defaults, overridden by the optional file (format from its
    /// extension), overridden by `FEASTFASTER__*` environment variables
    pub fn load(file: Option<&str>) -> Result<FeastFasterConfig, ConfigurationError> {
        let mut builder = Config::builder();
        match file {
            Some(path) => {
                log::info!("reading configuration from {path}");
                builder = builder.add_source(File::with_name(path).required(true));
            }
            None => log::info!("no configuration file given, using defaults"),
        }
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );
        Self::from_builder(builder, file.unwrap_or("environment"))
    }

    fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        source_name: &str,
    ) -> Result<FeastFasterConfig, ConfigurationError> {
        let config = builder
            .build()
            .map_err(|e| ConfigurationError::ConfigReadError {
                msg: format!("failed reading '{source_name}'"),
                source: e,
            })?;
        let result = config
            .try_deserialize::<FeastFasterConfig>()
            .map_err(|e| ConfigurationError::ConfigReadError {
                msg: format!("failed decoding '{source_name}'"),
                source: e,
            })?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.corridor
            .validate()
            .and_then(|_| self.feasibility.validate())
            .and_then(|_| self.charging.validate())
            .and_then(|_| self.routing.validate())
            .map_err(ConfigurationError::InvalidConfiguration)
    }
}
