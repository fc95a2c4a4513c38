//! OpenRouteService implementation of the Feast Faster routing port.
mod ors_client;
mod ors_config;
mod ors_request;
mod ors_response;

pub use ors_client::OrsClient;
pub use ors_config::OrsConfig;
