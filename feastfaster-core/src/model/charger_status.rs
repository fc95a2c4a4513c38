use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerStatus {
    Available,
    Unavailable,
    /// any status string the station operator reports that we do not model
    #[serde(other)]
    Unknown,
}

impl ChargerStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ChargerStatus::Available)
    }
}

impl Display for ChargerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargerStatus::Available => write!(f, "available"),
            ChargerStatus::Unavailable => write!(f, "unavailable"),
            ChargerStatus::Unknown => write!(f, "unknown"),
        }
    }
}
