use super::PipelineError;
use feastfaster_core::util::{geo_utils, lon_lat};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// inputs to a station search
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StationRequest {
    #[serde(with = "lon_lat")]
    pub current_location: Point<f64>,
    #[serde(with = "lon_lat")]
    pub destination: Point<f64>,
    pub ev_model: String,
    /// kilometers the vehicle can drive on `current_soc`
    pub current_car_range: f64,
    /// state of charge now, percent
    pub current_soc: f64,
    /// state of charge wanted when leaving the charger, percent
    pub desired_soc: f64,
    pub connector_type: String,
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
}

impl StationRequest {
    /// rejects requests that cannot be answered, before any collaborator is called
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (name, point) in [
            ("current_location", &self.current_location),
            ("destination", &self.destination),
        ] {
            if !geo_utils::is_valid_lon_lat(point) {
                return Err(PipelineError::InvalidArgument(format!(
                    "{name} ({}, {}) is not a valid (lon, lat) coordinate",
                    point.x(),
                    point.y()
                )));
            }
        }
        if !(self.current_car_range.is_finite() && self.current_car_range > 0.0) {
            return Err(PipelineError::InvalidArgument(format!(
                "current_car_range must be positive, found {}",
                self.current_car_range
            )));
        }
        validate_soc("current_soc", self.current_soc)?;
        validate_soc("desired_soc", self.desired_soc)?;
        if self.ev_model.trim().is_empty() {
            return Err(PipelineError::InvalidArgument(String::from(
                "ev_model must not be empty",
            )));
        }
        if self.connector_type.trim().is_empty() {
            return Err(PipelineError::InvalidArgument(String::from(
                "connector_type must not be empty",
            )));
        }
        Ok(())
    }
}

/// state of charge must be in (0, 100]
fn validate_soc(name: &str, soc: f64) -> Result<(), PipelineError> {
    if soc.is_finite() && soc > 0.0 && soc <= 100.0 {
        Ok(())
    } else {
        Err(PipelineError::InvalidArgument(format!(
            "{name} must be within (0, 100], found {soc}"
        )))
    }
}
