pub mod candidate_filter;
pub mod charge_time;
pub mod corridor;
pub mod feasibility;
pub mod route_sampler;

pub use candidate_filter::CandidateFilter;
