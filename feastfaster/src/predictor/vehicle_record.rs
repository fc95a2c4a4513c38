use serde::{Deserialize, Serialize};

/// charging characteristics of one vehicle model
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    pub ev_model: String,
    /// usable battery capacity
    pub battery_capacity_kwh: f64,
    /// peak DC charging power the vehicle accepts
    pub max_charge_power_kw: f64,
}
