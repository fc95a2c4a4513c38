use serde::{Deserialize, Serialize};

/// one row of input to a charging time scoring model. field names on the
/// wire match the names the regression model was trained with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChargeFeatures {
    #[serde(rename = "EVModel")]
    pub ev_model: String,
    /// state of charge at the start of the charging session, percent
    pub min_soc: f64,
    /// percent of battery to add
    pub soc_diff: f64,
    /// charger power in watts
    pub max_power: f64,
    /// ambient temperature in degrees celsius
    #[serde(rename = "mean_temp")]
    pub ambient_temperature: f64,
}
