pub mod config;
pub mod completion_client;
pub mod label_extractor;
pub mod classification_runner;
pub mod artifact_pipeline;
pub mod dataset;
pub mod experiment_driver;
