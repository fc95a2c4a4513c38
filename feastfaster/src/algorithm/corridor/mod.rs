mod corridor_polygon;
mod corridor_builder;
mod corridor_config;

pub use corridor_polygon::Corridor;
pub use corridor_builder::CorridorBuilder;
pub use corridor_config::CorridorConfig;
