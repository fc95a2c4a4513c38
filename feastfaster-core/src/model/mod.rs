mod candidate;
mod charge_features;
mod charger;
mod charger_status;
mod distance_matrix;
mod eta;
mod ids;
mod ranked_station;
mod reservation;
mod restaurant;
mod route;
mod station;
mod waypoint;

pub use candidate::{Candidate, FeasibleCandidate};
pub use charge_features::ChargeFeatures;
pub use charger::Charger;
pub use charger_status::ChargerStatus;
pub use distance_matrix::DistanceMatrix;
pub use eta::Eta;
pub use ids::{ChargerId, ReservationId, RestaurantId, StationId};
pub use ranked_station::RankedStation;
pub use reservation::Reservation;
pub use restaurant::Restaurant;
pub use route::{Route, RouteStep};
pub use station::Station;
pub use waypoint::Waypoint;
