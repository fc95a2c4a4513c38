mod app_context;
mod app_error;
mod cli_point;
mod feastfaster_app;

pub use app_context::{build_pipeline, Requirements};
pub use app_error::AppError;
pub use cli_point::parse_point;
pub use feastfaster_app::{FeastFasterApp, FeastFasterOperation};
