mod feasibility_config;
pub mod feasibility_ops;
mod feasibility_ranker;

pub use feasibility_config::FeasibilityConfig;
pub use feasibility_ranker::FeasibilityRanker;
