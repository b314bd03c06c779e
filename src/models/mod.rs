pub mod common;
pub mod completion;
pub mod requirement;
pub mod strategy;
pub mod artifact;
pub mod evaluation;

// Re-export common model types
pub use common::{Label, Provider, Role};
pub use completion::{ChatMessage, CompletionRequest};
pub use requirement::{derive_true_label, Dataset, RequirementRecord};
pub use strategy::{PromptCatalog, Strategy};
pub use artifact::{ArtifactBundle, ArtifactGate, ArtifactOutcome};
pub use evaluation::{score_columns, StrategyScore};
