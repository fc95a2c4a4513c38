use crate::{config::ConfigurationError, pipeline::PipelineError};
use feastfaster_core::service::{RepositoryError, RoutingError, ScoringError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading configuration: {source}")]
    ConfigurationError {
        #[from]
        source: ConfigurationError,
    },
    #[error("failure building routing client: {source}")]
    RoutingError {
        #[from]
        source: RoutingError,
    },
    #[error("failure loading stations: {source}")]
    RepositoryError {
        #[from]
        source: RepositoryError,
    },
    #[error("failure loading charging time model: {source}")]
    ScoringError {
        #[from]
        source: ScoringError,
    },
    #[error(transparent)]
    PipelineError {
        #[from]
        source: PipelineError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    MissingArgument(String),
}
