use crate::pipeline::PipelineError;
use feastfaster_core::{
    model::{ChargeFeatures, FeasibleCandidate, RankedStation},
    service::ChargeTimePredictor,
};
use uom::si::f64::Time;

/// scores charging duration for every feasible candidate in one batch.
pub struct ChargeTimeEstimator {
    /// process-wide ambient temperature fed to the model, degrees celsius
    ambient_temperature: f64,
}

impl ChargeTimeEstimator {
    pub fn new(ambient_temperature: f64) -> ChargeTimeEstimator {
        ChargeTimeEstimator {
            ambient_temperature,
        }
    }

    /// one feature row per candidate, in candidate order. the charger power is the
    /// most powerful of the candidate's matching chargers.
    pub fn features(
        &self,
        ev_model: &str,
        desired_soc: f64,
        candidates: &[FeasibleCandidate],
    ) -> Result<Vec<ChargeFeatures>, PipelineError> {
        candidates
            .iter()
            .map(|feasible| {
                let power = feasible.candidate.best_charger_power().ok_or_else(|| {
                    PipelineError::InvalidArgument(format!(
                        "station {} has no matching charger to score",
                        feasible.candidate.station_id
                    ))
                })?;
                let min_soc = feasible.soc_at_arrival as f64;
                Ok(ChargeFeatures {
                    ev_model: ev_model.to_string(),
                    min_soc,
                    soc_diff: desired_soc - min_soc,
                    max_power: power.get::<uom::si::power::watt>(),
                    ambient_temperature: self.ambient_temperature,
                })
            })
            .collect()
    }

    /// attaches a charging time estimate to every candidate. a scoring failure
    /// fails the whole batch.
    pub fn estimate(
        &self,
        predictor: &dyn ChargeTimePredictor,
        ev_model: &str,
        desired_soc: f64,
        candidates: Vec<FeasibleCandidate>,
    ) -> Result<Vec<RankedStation>, PipelineError> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }
        let features = self.features(ev_model, desired_soc, &candidates)?;
        let predictions = predictor.predict(&features)?;
        if predictions.len() != candidates.len() {
            return Err(PipelineError::ScoringUnavailable(format!(
                "scoring model returned {} predictions for {} stations",
                predictions.len(),
                candidates.len()
            )));
        }

        candidates
            .into_iter()
            .zip(predictions)
            .map(|(feasible, seconds)| {
                if !seconds.is_finite() {
                    return Err(PipelineError::ScoringUnavailable(format!(
                        "scoring model returned {seconds} for station {}",
                        feasible.candidate.station_id
                    )));
                }
                let duration = Time::new::<uom::si::time::second>(seconds.max(0.0));
                let minutes = duration.get::<uom::si::time::minute>().round() as u32;
                Ok(RankedStation {
                    feasible,
                    estimate_charging_time_min: minutes,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{self, FixedPredictor};
    use feastfaster_core::model::ChargerStatus;
    use geo::Point;

    fn feasible(id: i64, soc_at_arrival: u32) -> FeasibleCandidate {
        let mut station = test_util::station(id, Point::new(-105.0, 39.7), &["thai"], "CCS");
        station
            .chargers
            .push(test_util::charger(100 + id, id, "CCS", 150.0, ChargerStatus::Available));
        FeasibleCandidate {
            candidate: test_util::candidate(station),
            travel_time_min: 10,
            distance_km: 12.0,
            soc_at_arrival,
        }
    }

    #[test]
    fn test_feature_rows() {
        let estimator = ChargeTimeEstimator::new(18.5);
        let rows = estimator
            .features("Tesla Model 3", 80.0, &[feasible(1, 30), feasible(2, 45)])
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ev_model, "Tesla Model 3");
        assert_eq!(rows[0].min_soc, 30.0);
        assert_eq!(rows[0].soc_diff, 50.0);
        assert_eq!(rows[0].max_power, 150_000.0);
        assert_eq!(rows[0].ambient_temperature, 18.5);
        assert_eq!(rows[1].soc_diff, 35.0);
    }

    #[test]
    fn test_estimate_rounds_to_whole_minutes() {
        let predictor = FixedPredictor::new(vec![1529.0, 1531.0, -30.0]);
        let estimator = ChargeTimeEstimator::new(20.0);
        let result = estimator
            .estimate(
                &predictor,
                "Nissan Leaf",
                80.0,
                vec![feasible(1, 30), feasible(2, 40), feasible(3, 79)],
            )
            .unwrap();
        let minutes = result
            .iter()
            .map(|r| r.estimate_charging_time_min)
            .collect::<Vec<_>>();
        assert_eq!(minutes, vec![25, 26, 0]);
        assert_eq!(predictor.calls(), 1);
    }

    #[test]
    fn test_scoring_failure_fails_batch() {
        let predictor = FixedPredictor::failing();
        let estimator = ChargeTimeEstimator::new(20.0);
        let result = estimator.estimate(&predictor, "Nissan Leaf", 80.0, vec![feasible(1, 30)]);
        assert!(matches!(result, Err(PipelineError::ScoringUnavailable(_))));
    }

    #[test]
    fn test_prediction_length_mismatch() {
        let predictor = FixedPredictor::new(vec![600.0]);
        let estimator = ChargeTimeEstimator::new(20.0);
        let result = estimator.estimate(
            &predictor,
            "Nissan Leaf",
            80.0,
            vec![feasible(1, 30), feasible(2, 30)],
        );
        assert!(matches!(result, Err(PipelineError::ScoringUnavailable(_))));
    }

    #[test]
    fn test_empty_batch_skips_scoring() {
        let predictor = FixedPredictor::failing();
        let estimator = ChargeTimeEstimator::new(20.0);
        let result = estimator.estimate(&predictor, "Nissan Leaf", 80.0, vec![]).unwrap();
        assert!(result.is_empty());
        assert_eq!(predictor.calls(), 0);
    }
}
