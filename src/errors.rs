use thiserror::Error;

use crate::implementations::completion_client::ServiceError;
use crate::implementations::config::ConfigError;

/// Custom error types for the reqclass harness
#[derive(Debug, Error)]
pub enum ReqClassError {
    #[error("Completion service error: {0}")]
    ServiceError(#[from] ServiceError),

    #[error("Artifact stage '{stage}' failed: {message}")]
    ArtifactStageError { stage: String, message: String },

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Missing column in dataset: {0}")]
    MissingColumn(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Result type specific to reqclass operations
pub type ReqClassResult<T> = Result<T, ReqClassError>;

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for ReqClassError {
    fn is_recoverable(&self) -> bool {
        matches!(self, ReqClassError::ServiceError(_) | ReqClassError::ArtifactStageError { .. })
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            ReqClassError::ServiceError(_) =>
                Some("The cell is recorded as ERROR and the run continues".to_string()),
            ReqClassError::ArtifactStageError { .. } =>
                Some("The next qualifying requirement retries artifact generation".to_string()),
            ReqClassError::MissingColumn(column) =>
                Some(format!("Add a '{}' column to the dataset", column)),
            ReqClassError::UnknownStrategy(_) =>
                Some("Run `reqclass strategies` to list the available names".to_string()),
            ReqClassError::ConfigError(ConfigError::MissingApiKey(_)) =>
                Some("Set OPENAI_API_KEY (or another provider key) in the environment or .env".to_string()),
            _ => None,
        }
    }
}
