use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("failure reading station data from {0}: {1}")]
    ReadError(String, String),
    #[error("station data is invalid: {0}")]
    InvalidData(String),
    #[error("{0}")]
    InternalError(String),
}
