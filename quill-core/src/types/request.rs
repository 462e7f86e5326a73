//! Per-call streaming request

use crate::types::config::{ProviderConfig, ProviderKind};

/// Everything needed to run one streaming call
///
/// Built per call and consumed by it; the configuration is a snapshot that
/// stays fixed for the lifetime of the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamRequest {
    /// Which provider to talk to
    pub provider: ProviderKind,
    /// Credentials and model for that provider
    pub config: ProviderConfig,
    /// The full prompt text
    pub prompt: String,
}

impl StreamRequest {
    /// Create a new streaming request
    pub fn new(provider: ProviderKind, config: ProviderConfig, prompt: impl Into<String>) -> Self {
        Self {
            provider,
            config,
            prompt: prompt.into(),
        }
    }

    /// Shorthand for an OpenAI request
    pub fn openai(config: ProviderConfig, prompt: impl Into<String>) -> Self {
        Self::new(ProviderKind::OpenAI, config, prompt)
    }

    /// Shorthand for a Gemini request
    pub fn gemini(config: ProviderConfig, prompt: impl Into<String>) -> Self {
        Self::new(ProviderKind::Gemini, config, prompt)
    }
}
