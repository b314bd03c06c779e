use log::{ debug, warn };

use crate::implementations::completion_client::ServiceError;
use crate::implementations::label_extractor::extract_label;
use crate::models::common::Label;
use crate::models::completion::{ ChatMessage, CompletionRequest };
use crate::models::strategy::Strategy;
use crate::traits::completion_service::CompletionService;

/// System prompt sent with every classification request
pub const CLASSIFIER_SYSTEM_PROMPT: &str = "You are a requirements engineering expert.";

/// Inputs and outcome of one classification call
#[derive(Debug)]
pub struct ClassificationAttempt {
    pub strategy_name: String,
    pub requirement_text: String,
    /// Raw model text, or the failure that prevented getting one
    pub response: Result<String, ServiceError>,
    pub label: Label,
}

/// Classifies requirement texts with one completion call each
pub struct ClassificationRunner<'a> {
    service: &'a dyn CompletionService,
    temperature: f32,
    max_tokens: usize,
}

impl<'a> ClassificationRunner<'a> {
    pub fn new(service: &'a dyn CompletionService, temperature: f32, max_tokens: usize) -> Self {
        Self { service, temperature, max_tokens }
    }

    /// The two-message exchange for a strategy and requirement
    pub fn build_request(&self, strategy: &Strategy, requirement_text: &str) -> CompletionRequest {
        CompletionRequest::new(
            self.service.model(),
            vec![
                ChatMessage::system(CLASSIFIER_SYSTEM_PROMPT),
                ChatMessage::user(strategy.render(requirement_text))
            ]
        )
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    /// Call the service once and return the raw response text
    pub async fn request(&self, strategy: &Strategy, requirement_text: &str) -> Result<String, ServiceError> {
        let request = self.build_request(strategy, requirement_text);
        self.service.complete(&request).await
    }

    /// Call the service once; a failure becomes `Label::Error`, never a retry
    pub async fn attempt(&self, strategy: &Strategy, requirement_text: &str) -> ClassificationAttempt {
        let response = self.request(strategy, requirement_text).await;
        let label = match &response {
            Ok(raw) => {
                let label = extract_label(raw);
                if label == Label::Error {
                    debug!("No F/NF token in response for strategy {}: {:?}", strategy.name, raw);
                }
                label
            }
            Err(e) => {
                warn!("Error. Cannot be classified ({}): {}", strategy.name, e);
                Label::Error
            }
        };

        ClassificationAttempt {
            strategy_name: strategy.name.clone(),
            requirement_text: requirement_text.to_string(),
            response,
            label,
        }
    }

    pub async fn classify(&self, strategy: &Strategy, requirement_text: &str) -> Label {
        self.attempt(strategy, requirement_text).await.label
    }
}
