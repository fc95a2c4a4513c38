mod feastfaster_pipeline;
mod pipeline_error;
mod station_request;

pub use feastfaster_pipeline::FeastFasterPipeline;
pub use pipeline_error::PipelineError;
pub use station_request::StationRequest;
