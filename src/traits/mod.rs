pub mod completion_service;
pub mod run_observer;

// Re-export traits
pub use completion_service::CompletionService;
pub use run_observer::{NoopObserver, RunObserver};
