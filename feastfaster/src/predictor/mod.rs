mod energy_balance_predictor;
mod http_charge_time_predictor;
mod predictor_config;
mod vehicle_record;

pub use energy_balance_predictor::EnergyBalancePredictor;
pub use http_charge_time_predictor::HttpChargeTimePredictor;
pub use predictor_config::PredictorConfig;
pub use vehicle_record::VehicleRecord;
