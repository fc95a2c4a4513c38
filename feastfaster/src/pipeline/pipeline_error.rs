use feastfaster_core::service::{RepositoryError, RoutingError, ScoringError};
use thiserror::Error;

/// failure kinds surfaced by the pipeline entry points. an empty result is
/// never an error.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("routing unavailable: {0}")]
    RoutingUnavailable(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("charging time scoring unavailable: {0}")]
    ScoringUnavailable(String),
    #[error("station repository unavailable: {0}")]
    RepositoryUnavailable(String),
}

impl From<RoutingError> for PipelineError {
    fn from(value: RoutingError) -> Self {
        PipelineError::RoutingUnavailable(value.to_string())
    }
}

impl From<ScoringError> for PipelineError {
    fn from(value: ScoringError) -> Self {
        PipelineError::ScoringUnavailable(value.to_string())
    }
}

impl From<RepositoryError> for PipelineError {
    fn from(value: RepositoryError) -> Self {
        PipelineError::RepositoryUnavailable(value.to_string())
    }
}
