use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
