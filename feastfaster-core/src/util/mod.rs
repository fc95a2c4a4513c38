pub mod geo_utils;
pub mod lon_lat;
mod projection;

pub use projection::{PlanarFrame, Projection};
