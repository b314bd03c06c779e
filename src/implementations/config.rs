use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::ExperimentConfig;
use crate::models::common::Provider;
use crate::models::strategy::PromptCatalog;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),

    #[error("Missing API endpoint for provider: {0}")]
    MissingEndpoint(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// API key for LLM service
    pub api_key: Option<String>,

    /// Preferred provider (openai, anthropic, azure, mistral)
    pub provider: Option<Provider>,

    /// API endpoint for LLM service
    pub api_endpoint: Option<String>,

    /// API model to use
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Everything a config file may contain
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HarnessConfig {
    /// Configuration for the completion service
    #[serde(default)]
    pub llm_api: ApiConfig,

    /// Experiment tunables
    #[serde(default)]
    pub experiment: ExperimentConfig,

    /// Strategies in evaluation order; replaces the built-in catalog when present
    #[serde(default)]
    pub strategies: Option<PromptCatalog>,
}

impl HarnessConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: HarnessConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// The catalog to evaluate: the configured one, or the built-in patterns
    pub fn catalog(&self) -> PromptCatalog {
        self.strategies.clone().unwrap_or_else(PromptCatalog::builtin)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            llm_api: ApiConfig {
                api_key: None,
                provider: Some(Provider::OpenAI),
                api_endpoint: None,
                model: Some("gpt-4o".to_string()),
                timeout_secs: Some(120),
            },
            experiment: ExperimentConfig::default(),
            strategies: None,
        }
    }
}

impl ApiConfig {
    /// Get the API key, checking environment variables if not in config.
    /// If the preferred provider has no key, the other known providers are tried.
    pub fn get_api_key(&self) -> Result<(Provider, String), ConfigError> {
        use log::{debug, info};

        let preferred = self.provider.clone().unwrap_or(Provider::OpenAI);

        // First check if we have the API key in the config
        if let Some(api_key) = &self.api_key {
            debug!("Using API key from config");
            return Ok((preferred, api_key.clone()));
        }

        match std::env::var(preferred.env_var()) {
            Ok(key) => {
                info!("Using preferred provider: {}", preferred);
                return Ok((preferred, key));
            },
            Err(_) => {
                debug!("Preferred provider {} not available, trying others", preferred);
            }
        }

        // Try all other providers
        for provider in Provider::all() {
            if provider == preferred {
                continue;
            }
            match std::env::var(provider.env_var()) {
                Ok(key) => {
                    info!("Using alternative provider: {} (preferred was {})", provider, preferred);
                    return Ok((provider, key));
                },
                Err(_) => {
                    debug!("Provider {} not available", provider);
                }
            }
        }

        // If we get here, no API keys were found
        Err(ConfigError::MissingApiKey("No API keys found for any provider".to_string()))
    }

    /// Endpoint and model for the resolved provider.
    /// Configured values only apply when the key lookup landed on the configured provider.
    pub fn endpoint_and_model(&self, provider: &Provider) -> Result<(String, String), ConfigError> {
        let configured = self.provider.as_ref().map_or(true, |p| p == provider);
        let api_endpoint = if configured { self.api_endpoint.clone() } else { None };
        let model = if configured { self.model.clone() } else { None };

        let endpoint = match (provider, api_endpoint) {
            (_, Some(endpoint)) => endpoint,
            (Provider::OpenAI, None) => "https://api.openai.com/v1/chat/completions".to_string(),
            (Provider::Anthropic, None) => "https://api.anthropic.com/v1/messages".to_string(),
            (Provider::Mistral, None) => "https://api.mistral.ai/v1/chat/completions".to_string(),
            (Provider::Azure, None) => {
                return Err(ConfigError::MissingEndpoint(provider.to_string()));
            }
        };

        let model = model.unwrap_or_else(|| {
            match provider {
                Provider::Anthropic => "claude-3-5-sonnet-20241022".to_string(),
                Provider::Mistral => "mistral-large-latest".to_string(),
                _ => "gpt-4o".to_string(),
            }
        });

        Ok((endpoint, model))
    }
}
