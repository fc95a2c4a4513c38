use crate::pipeline::PipelineError;
use serde::Serialize;
use std::fmt::Display;
use uom::si::f64::Time;

/// a strictly positive number of minutes between route samples
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct SamplingInterval(u64);

impl SamplingInterval {
    pub fn minutes(&self) -> u64 {
        self.0
    }

    pub fn duration(&self) -> Time {
        Time::new::<uom::si::time::minute>(self.0 as f64)
    }
}

impl TryFrom<i64> for SamplingInterval {
    type Error = PipelineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(PipelineError::InvalidArgument(format!(
                "sampling interval must be a positive number of minutes, found {value}"
            )));
        }
        Ok(SamplingInterval(value as u64))
    }
}

impl Display for SamplingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}
