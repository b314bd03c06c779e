use async_trait::async_trait;

use crate::implementations::completion_client::ServiceError;
use crate::models::completion::CompletionRequest;

/// Text-in/text-out boundary to a large language model.
///
/// Implementations return the completion text or a `ServiceError`; they never
/// interpret the content. Each call may cost money and time, so callers issue
/// them one at a time.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Model identifier placed in requests built by the harness
    fn model(&self) -> &str;

    /// Send one request and return the trimmed completion text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}
