use crate::{
    ors_request::{DirectionsRequest, MatrixRequest},
    ors_response::{DirectionsResponse, MatrixResponse},
    OrsConfig,
};
use feastfaster_core::{
    model::{DistanceMatrix, Route},
    service::{RoutingError, RoutingService},
};
use geo::Point;
use reqwest::{blocking::Client, header::AUTHORIZATION};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// longest body excerpt kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

/// blocking OpenRouteService client. build once at startup and share; the
/// underlying connection pool is safe for concurrent use.
pub struct OrsClient {
    client: Client,
    config: OrsConfig,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<OrsClient, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("feastfaster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RoutingError::Transport(format!("failure building http client: {e}")))?;
        Ok(OrsClient { client, config })
    }

    pub fn config(&self) -> &OrsConfig {
        &self.config
    }

    fn post<B, R>(&self, url: &str, body: &B) -> Result<R, RoutingError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        log::debug!("POST {url}");
        let mut request = self.client.post(url).json(body);
        if let Some(key) = &self.config.api_key {
            request = request.header(AUTHORIZATION, key);
        }
        let response = request.send().map_err(|e| to_routing_error(url, e))?;
        let status = response.status();
        let text = response.text().map_err(|e| to_routing_error(url, e))?;
        if !status.is_success() {
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }
        serde_json::from_str(&text).map_err(|e| {
            RoutingError::MalformedResponse(format!("failure decoding response from {url}: {e}"))
        })
    }
}

impl RoutingService for OrsClient {
    fn directions(
        &self,
        origin: Point<f64>,
        destination: Point<f64>,
    ) -> Result<Route, RoutingError> {
        let body = DirectionsRequest::new(origin, destination);
        let response: DirectionsResponse = self.post(&self.config.directions_url(), &body)?;
        Route::try_from(response)
    }

    fn distance_matrix(
        &self,
        origin: Point<f64>,
        destinations: &[Point<f64>],
    ) -> Result<DistanceMatrix, RoutingError> {
        let body = MatrixRequest::one_to_many(origin, destinations);
        let response: MatrixResponse = self.post(&self.config.matrix_url(), &body)?;
        response.into_distance_matrix()
    }
}

fn to_routing_error(url: &str, error: reqwest::Error) -> RoutingError {
    if error.is_timeout() {
        RoutingError::Timeout(format!("{url}: {error}"))
    } else {
        RoutingError::Transport(format!("{url}: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_transport_error() {
        // port 9 (discard) on localhost is closed on test machines
        let config = OrsConfig {
            base_url: String::from("http://127.0.0.1:9"),
            timeout_secs: 2,
            ..Default::default()
        };
        let client = OrsClient::new(config).unwrap();
        let result = client.directions(Point::new(8.68, 49.41), Point::new(8.69, 49.42));
        match result {
            Err(e) => assert!(e.is_transient(), "unexpected error kind: {e}"),
            Ok(_) => panic!("expected failure against a closed port"),
        }
    }
}
