use feastfaster_core::{
    model::ChargeFeatures,
    service::{ChargeTimePredictor, ScoringError},
};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// scores feature batches on an external model server. the batch is posted as
/// a JSON array of feature rows; the server answers with predicted seconds.
pub struct HttpChargeTimePredictor {
    client: Client,
    url: String,
}

/// accepted response bodies: a bare array or `{"predictions": [...]}`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PredictionResponse {
    Bare(Vec<f64>),
    Wrapped { predictions: Vec<f64> },
}

impl PredictionResponse {
    fn into_predictions(self) -> Vec<f64> {
        match self {
            PredictionResponse::Bare(p) => p,
            PredictionResponse::Wrapped { predictions } => predictions,
        }
    }
}

impl HttpChargeTimePredictor {
    pub fn new(url: String, timeout_secs: u64) -> Result<HttpChargeTimePredictor, ScoringError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ScoringError::Transport(format!("failure building http client: {e}")))?;
        Ok(HttpChargeTimePredictor { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChargeTimePredictor for HttpChargeTimePredictor {
    fn predict(&self, features: &[ChargeFeatures]) -> Result<Vec<f64>, ScoringError> {
        log::debug!("POST {} with {} feature rows", self.url, features.len());
        let response = self
            .client
            .post(&self.url)
            .json(features)
            .send()
            .map_err(|e| to_scoring_error(&self.url, e))?;
        let status = response.status();
        let text = response.text().map_err(|e| to_scoring_error(&self.url, e))?;
        if !status.is_success() {
            return Err(ScoringError::ModelError(format!(
                "model server returned status {}: {}",
                status.as_u16(),
                text.chars().take(512).collect::<String>()
            )));
        }
        let predictions = decode_predictions(&text)?;
        if predictions.len() != features.len() {
            return Err(ScoringError::LengthMismatch {
                expected: features.len(),
                found: predictions.len(),
            });
        }
        Ok(predictions)
    }
}

fn decode_predictions(text: &str) -> Result<Vec<f64>, ScoringError> {
    let response: PredictionResponse = serde_json::from_str(text).map_err(|e| {
        ScoringError::ModelError(format!("failure decoding model server response: {e}"))
    })?;
    Ok(response.into_predictions())
}

fn to_scoring_error(url: &str, e: reqwest::Error) -> ScoringError {
    if e.is_timeout() {
        ScoringError::Timeout(format!("{url}: {e}"))
    } else {
        ScoringError::Transport(format!("{url}: {e}"))
    }
}
