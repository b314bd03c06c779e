mod model_tests;
mod classification_runner_tests;
mod completion_client_tests;

use std::sync::Mutex;

use async_trait::async_trait;

use crate::implementations::completion_client::ServiceError;
use crate::models::completion::CompletionRequest;
use crate::traits::completion_service::CompletionService;

type Responder = dyn Fn(&CompletionRequest) -> Result<String, ServiceError> + Send + Sync;

/// In-process completion service answering from a closure and recording requests
pub struct ScriptedService {
    responder: Box<Responder>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedService {
    pub fn new<F>(responder: F) -> Self
        where F: Fn(&CompletionRequest) -> Result<String, ServiceError> + Send + Sync + 'static
    {
        Self { responder: Box::new(responder), requests: Mutex::new(Vec::new()) }
    }

    /// Always answer with the same text
    pub fn fixed(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    /// Always fail as if the network were down
    pub fn failing() -> Self {
        Self::new(|_| Err(ServiceError::NetworkError("connection refused".to_string())))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

/// True when the request is one of the artifact stages rather than a classification
pub fn is_artifact_request(request: &CompletionRequest) -> bool {
    request.messages.len() == 1
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
