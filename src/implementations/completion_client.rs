use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::implementations::config::{ ApiConfig, ConfigError };
use crate::models::common::{ Provider, Role };
use crate::models::completion::CompletionRequest;
use crate::traits::completion_service::CompletionService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("API error: {0}")] ApiError(String),

    #[error("Configuration error: {0}")] ConfigError(#[from] ConfigError),

    #[error("Failed to parse API response: {0}")] ParseError(String),

    #[error("Network error: {0}")] NetworkError(String),

    #[error(transparent)] SerdeError(#[from] serde_json::Error),

    #[error("HTTP error: {status} - {message}")] HttpError {
        status: u16,
        message: String,
    },
}

/// OpenAI-compatible request types
#[derive(Debug, Serialize, Deserialize, Clone)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: usize,
}

/// Anthropic messages API request; system prompts travel outside `messages`
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: usize,
}

/// Completion service backed by a hosted LLM over HTTP
///
/// # API Keys
/// The key comes from the `llm_api.api_key` config field or, failing that, from
/// the environment variable of the preferred provider:
///    - OpenAI: OPENAI_API_KEY
///    - Anthropic: ANTHROPIC_API_KEY
///    - Azure OpenAI: AZURE_OPENAI_API_KEY
///    - Mistral: MISTRAL_API_KEY
///
/// When the preferred provider has no key, the others are tried in that order.
#[derive(Clone)]
pub struct LLMCompletionClient {
    http_client: reqwest::Client,
    provider: Provider,
    api_key: String,
    api_endpoint: String,
    model: String,
}

impl LLMCompletionClient {
    /// Resolve provider, key, endpoint and model from the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        let (provider, api_key) = config.get_api_key()?;
        let (api_endpoint, model) = config.endpoint_and_model(&provider)?;

        let http_client = reqwest::Client
            ::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs.unwrap_or(120)))
            .build()
            .map_err(|e| ServiceError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        info!("Completion client ready: provider {}, model {}", provider, model);

        Ok(Self {
            http_client,
            provider,
            api_key,
            api_endpoint,
            model,
        })
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    fn build_body(&self, request: &CompletionRequest) -> Result<serde_json::Value, ServiceError> {
        let body = if self.provider == Provider::Anthropic {
            let system = request.messages
                .iter()
                .filter(|m| m.role == Role::System)
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let messages = request.messages
                .iter()
                .filter(|m| m.role != Role::System)
                .map(|m| WireMessage { role: m.role.as_str().to_string(), content: m.content.clone() })
                .collect();

            serde_json::to_value(AnthropicRequest {
                model: request.model.clone(),
                system: if system.is_empty() { None } else { Some(system) },
                messages,
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            })?
        } else {
            let messages = request.messages
                .iter()
                .map(|m| WireMessage { role: m.role.as_str().to_string(), content: m.content.clone() })
                .collect();

            serde_json::to_value(ChatRequest {
                model: request.model.clone(),
                messages,
                temperature: request.temperature,
                max_tokens: request.max_tokens,
            })?
        };
        Ok(body)
    }

    fn request_builder(&self, body: &serde_json::Value) -> reqwest::RequestBuilder {
        let builder = self.http_client
            .post(&self.api_endpoint)
            .header("Content-Type", "application/json");

        match self.provider {
            Provider::Anthropic =>
                builder
                    .header("x-api-key", &self.api_key)
                    .header("anthropic-version", "2023-06-01")
                    .json(body),
            Provider::Azure => builder.header("api-key", &self.api_key).json(body),
            _ => builder.header("Authorization", format!("Bearer {}", self.api_key)).json(body),
        }
    }
}

/// Pull the completion text out of a provider response body
pub fn extract_content(provider: &Provider, response_json: &serde_json::Value) -> Result<String, ServiceError> {
    let text = match provider {
        Provider::Anthropic => {
            let content_array = response_json["content"]
                .as_array()
                .ok_or_else(|| ServiceError::ParseError("Missing content in Anthropic response".to_string()))?;
            content_array
                .iter()
                .find_map(|item| item["text"].as_str())
                .ok_or_else(|| ServiceError::ParseError("Missing text in Anthropic response content".to_string()))?
        }
        _ => {
            let choices = response_json["choices"]
                .as_array()
                .ok_or_else(|| ServiceError::ParseError("Missing choices in API response".to_string()))?;
            if choices.is_empty() {
                return Err(ServiceError::ApiError("No response from API".to_string()));
            }
            choices[0]["message"]["content"]
                .as_str()
                .ok_or_else(|| ServiceError::ParseError("Missing message content in API response".to_string()))?
        }
    };
    Ok(text.trim().to_string())
}

#[async_trait]
impl CompletionService for LLMCompletionClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        debug!("API endpoint: {}", self.api_endpoint);
        debug!("Model: {}", request.model);
        debug!("Temperature: {}", request.temperature);
        debug!("Max tokens: {}", request.max_tokens);
        debug!(
            "Prompt length: {} characters",
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let body = self.build_body(request)?;

        let response = self.request_builder(&body).send().await.map_err(|e| {
            let error_msg = format!("Network error when calling {} API: {}", self.provider, e);
            warn!("{}", error_msg);
            if e.is_timeout() {
                warn!("Request timed out");
            }
            if e.is_connect() {
                warn!("Connection error - check network connectivity");
            }
            ServiceError::NetworkError(error_msg)
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(ServiceError::HttpError {
                status,
                message: error_text,
            });
        }

        let response_text = response.text().await.map_err(|e| {
            warn!("Failed to get response text: {}", e);
            ServiceError::ParseError(e.to_string())
        })?;

        debug!("Response length: {} characters", response_text.len());

        let response_json: serde_json::Value = serde_json
            ::from_str(&response_text)
            .map_err(|e| ServiceError::ParseError(format!("Invalid JSON response: {}", e)))?;

        let content = extract_content(&self.provider, &response_json)?;
        debug!("Response content length: {} characters", content.len());

        Ok(content)
    }
}
