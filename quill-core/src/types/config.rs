//! Provider selection and per-provider configuration

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions, `data:`-line framing
    #[default]
    OpenAI,
    /// Google Gemini `streamGenerateContent`, SSE framing
    Gemini,
}

impl ProviderKind {
    /// Lowercase identifier used in settings and error reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Name used at the start of user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "gemini" => Ok(ProviderKind::Gemini),
            _ => Err(Error::Configuration(format!("Unknown GPT provider: {}", s))),
        }
    }
}

/// Credentials and model for one provider
///
/// An empty `api_key` is a valid value meaning "unconfigured"; it only
/// becomes an error when a stream is started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key for authentication
    pub api_key: String,
    /// Model identifier, e.g. `gpt-4o-mini`
    pub model: String,
    /// Optional override of the provider's base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Create a configuration from an API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whether an API key has been supplied
    ///
    /// Stricter than an emptiness check: a key made only of whitespace
    /// counts as missing.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
