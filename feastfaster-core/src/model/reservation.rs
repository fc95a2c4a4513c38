use super::{ChargerId, ReservationId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub charger_id: ChargerId,
}
