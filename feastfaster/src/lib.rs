pub mod algorithm;
pub mod app;
pub mod config;
pub mod pipeline;
pub mod predictor;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_util;
