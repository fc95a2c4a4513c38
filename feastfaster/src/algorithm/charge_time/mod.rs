mod charge_time_estimator;

pub use charge_time_estimator::ChargeTimeEstimator;
