use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

/// Categorical outcome of classifying a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Functional requirement ("F")
    #[serde(rename = "F")]
    Functional,
    /// Non-functional requirement ("NF")
    #[serde(rename = "NF")]
    NonFunctional,
    /// Sentinel for a failed call or unparseable model output ("ERROR")
    #[serde(rename = "ERROR")]
    Error,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Functional => "F",
            Label::NonFunctional => "NF",
            Label::Error => "ERROR",
        }
    }

    pub fn is_functional(&self) -> bool {
        matches!(self, Label::Functional)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Label::Functional),
            "NF" => Ok(Label::NonFunctional),
            "ERROR" => Ok(Label::Error),
            other => Err(format!("Unknown label: {}", other)),
        }
    }
}

/// Role of a message in a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// LLM providers the completion client knows how to talk to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Azure,
    Mistral,
}

impl Provider {
    /// Environment variable holding the API key for this provider
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Azure => "AZURE_OPENAI_API_KEY",
            Provider::Mistral => "MISTRAL_API_KEY",
        }
    }

    pub fn all() -> [Provider; 4] {
        [Provider::OpenAI, Provider::Anthropic, Provider::Azure, Provider::Mistral]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Azure => "azure",
            Provider::Mistral => "mistral",
        };
        f.write_str(name)
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            "azure" => Ok(Provider::Azure),
            "mistral" => Ok(Provider::Mistral),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}
