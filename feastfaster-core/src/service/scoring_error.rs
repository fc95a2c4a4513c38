use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("scoring request timed out: {0}")]
    Timeout(String),
    #[error("scoring transport failure: {0}")]
    Transport(String),
    #[error("scoring model returned {found} predictions for {expected} feature rows")]
    LengthMismatch { expected: usize, found: usize },
    #[error("scoring model cannot score vehicle '{0}'")]
    UnknownVehicle(String),
    #[error("scoring model failed: {0}")]
    ModelError(String),
}
