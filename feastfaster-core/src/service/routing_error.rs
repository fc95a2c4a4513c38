use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("routing request timed out: {0}")]
    Timeout(String),
    #[error("routing transport failure: {0}")]
    Transport(String),
    #[error("routing provider returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("routing provider returned an unexpected response: {0}")]
    MalformedResponse(String),
    #[error("routing provider returned a degenerate route: {0}")]
    DegenerateRoute(String),
}

impl RoutingError {
    /// true for failures that may succeed when the same request is sent again
    pub fn is_transient(&self) -> bool {
        match self {
            RoutingError::Timeout(_) | RoutingError::Transport(_) => true,
            RoutingError::Api { status, .. } => *status == 429 || *status >= 500,
            RoutingError::MalformedResponse(_) | RoutingError::DegenerateRoute(_) => false,
        }
    }
}
