mod route_expansion;
mod route_sampler_ops;
mod sampling_interval;
mod timed_vertex;

pub use route_expansion::expand_route;
pub use route_sampler_ops::{sample, RouteSampler};
pub use sampling_interval::SamplingInterval;
pub use timed_vertex::TimedVertex;
