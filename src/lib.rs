pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::ExperimentConfig;
pub use errors::{ ReqClassError, ReqClassResult, RecoverableError };
pub use implementations::artifact_pipeline::{ ArtifactPipeline, ArtifactSettings };
pub use implementations::classification_runner::{ ClassificationAttempt, ClassificationRunner };
pub use implementations::completion_client::{ LLMCompletionClient, ServiceError };
pub use implementations::config::{ ApiConfig, ConfigError, HarnessConfig };
pub use implementations::experiment_driver::{ ExperimentDriver, ExperimentReport };
pub use implementations::label_extractor::{ extract_label, extract_label_opt };
pub use models::{
    common::{ Label, Provider, Role },
    completion::{ ChatMessage, CompletionRequest },
    requirement::{ derive_true_label, Dataset, RequirementRecord },
    strategy::{ PromptCatalog, Strategy },
    artifact::{ ArtifactBundle, ArtifactGate, ArtifactOutcome },
    evaluation::StrategyScore,
};
pub use traits::{ CompletionService, NoopObserver, RunObserver };
