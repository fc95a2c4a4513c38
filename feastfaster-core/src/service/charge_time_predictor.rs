use super::ScoringError;
use crate::model::ChargeFeatures;

/// opaque charging duration model. loaded once at startup and shared read-only
/// between requests, so implementations must be pure with respect to their input.
pub trait ChargeTimePredictor: Send + Sync {
    /// predicted charging seconds for each feature row, in input order
    fn predict(&self, features: &[ChargeFeatures]) -> Result<Vec<f64>, ScoringError>;
}
