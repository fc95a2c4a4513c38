use super::VehicleRecord;
use csv::ReaderBuilder;
use feastfaster_core::{
    model::ChargeFeatures,
    service::{ChargeTimePredictor, ScoringError},
};
use std::{collections::HashMap, io::Read, path::Path};
use uom::si::f64::{Energy, Power, Time};

/// vehicles bundled with the binary
const DEFAULT_VEHICLES: &str = include_str!("../resources/vehicles.csv");

/// state of charge above which charging power tapers
const TAPER_SOC: f64 = 80.0;
/// fraction of peak power delivered above [`TAPER_SOC`]
const TAPER_FACTOR: f64 = 0.5;
/// battery temperature window with no derating, degrees celsius
const OPTIMAL_TEMPERATURE: (f64, f64) = (20.0, 35.0);
const MIN_TEMPERATURE_FACTOR: f64 = 0.3;

/// deterministic charging time model: the energy needed to go from `min_soc`
/// to `min_soc + soc_diff`, delivered at the lesser of the charger and vehicle
/// peak power, derated for ambient temperature and tapered near full.
pub struct EnergyBalancePredictor {
    vehicles: HashMap<String, VehicleRecord>,
}

impl EnergyBalancePredictor {
    pub fn new(records: Vec<VehicleRecord>) -> Result<EnergyBalancePredictor, ScoringError> {
        let mut vehicles = HashMap::with_capacity(records.len());
        for record in records.into_iter() {
            if !positive(record.battery_capacity_kwh) || !positive(record.max_charge_power_kw) {
                return Err(ScoringError::ModelError(format!(
                    "vehicle '{}' must have positive capacity and power",
                    record.ev_model
                )));
            }
            vehicles.insert(vehicle_key(&record.ev_model), record);
        }
        Ok(EnergyBalancePredictor { vehicles })
    }

    /// reads a vehicle table with header `ev_model,battery_capacity_kwh,max_charge_power_kw`
    pub fn from_reader<R: Read>(reader: R) -> Result<EnergyBalancePredictor, ScoringError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = rdr
            .deserialize()
            .collect::<Result<Vec<VehicleRecord>, _>>()
            .map_err(|e| ScoringError::ModelError(format!("failure reading vehicle table: {e}")))?;
        Self::new(records)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EnergyBalancePredictor, ScoringError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|e| {
            ScoringError::ModelError(format!(
                "failure opening vehicle table {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let predictor = Self::from_reader(file)?;
        log::info!(
            "loaded {} vehicle models from {}",
            predictor.vehicles.len(),
            path.as_ref().display()
        );
        Ok(predictor)
    }

    /// predictor over the vehicle table bundled with the binary
    pub fn bundled() -> Result<EnergyBalancePredictor, ScoringError> {
        Self::from_reader(DEFAULT_VEHICLES.as_bytes())
    }

    pub fn vehicle(&self, ev_model: &str) -> Option<&VehicleRecord> {
        self.vehicles.get(&vehicle_key(ev_model))
    }

    fn predict_row(&self, row: &ChargeFeatures) -> Result<f64, ScoringError> {
        let vehicle = self
            .vehicle(&row.ev_model)
            .ok_or_else(|| ScoringError::UnknownVehicle(row.ev_model.clone()))?;
        if row.soc_diff <= 0.0 {
            return Ok(0.0);
        }
        if !positive(row.max_power) {
            return Err(ScoringError::ModelError(format!(
                "charger power must be positive, found {}W",
                row.max_power
            )));
        }
        let charger_power = Power::new::<uom::si::power::watt>(row.max_power);
        let vehicle_power = Power::new::<uom::si::power::kilowatt>(vehicle.max_charge_power_kw);
        let peak_power = if charger_power < vehicle_power {
            charger_power
        } else {
            vehicle_power
        };
        let power = peak_power * temperature_factor(row.ambient_temperature);
        let capacity = Energy::new::<uom::si::energy::kilowatt_hour>(vehicle.battery_capacity_kwh);

        let start = row.min_soc.clamp(0.0, 100.0);
        let end = (row.min_soc + row.soc_diff).clamp(0.0, 100.0);
        let bulk_pct = (end.min(TAPER_SOC) - start).max(0.0);
        let taper_pct = (end - start.max(TAPER_SOC)).max(0.0);
        let bulk: Time = capacity * (bulk_pct / 100.0) / power;
        let taper: Time = capacity * (taper_pct / 100.0) / (power * TAPER_FACTOR);
        Ok((bulk + taper).get::<uom::si::time::second>())
    }
}

impl ChargeTimePredictor for EnergyBalancePredictor {
    fn predict(&self, features: &[ChargeFeatures]) -> Result<Vec<f64>, ScoringError> {
        features.iter().map(|row| self.predict_row(row)).collect()
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn vehicle_key(ev_model: &str) -> String {
    ev_model.trim().to_lowercase()
}

/// share of peak power available at this ambient temperature. cold batteries
/// lose 2% per degree below the window, hot batteries 1% per degree above it.
fn temperature_factor(celsius: f64) -> f64 {
    let (low, high) = OPTIMAL_TEMPERATURE;
    let factor = if celsius < low {
        1.0 - 0.02 * (low - celsius)
    } else if celsius > high {
        1.0 - 0.01 * (celsius - high)
    } else {
        1.0
    };
    factor.max(MIN_TEMPERATURE_FACTOR)
}
