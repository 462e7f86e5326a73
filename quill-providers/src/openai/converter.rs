//! Request building for OpenAI

use crate::constants::{DEFAULT_TEMPERATURE, OPENAI_DEFAULT_BASE_URL};
use crate::error;
use crate::http::{create_headers, HttpRequest};
use crate::traits::RequestConverter;
use quill_core::{Error, ProviderConfig, ProviderKind};
use serde_json::json;

/// Builds OpenAI chat-completion requests
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIConverter;

impl OpenAIConverter {
    /// Get the URL for chat completions
    pub fn chat_url(config: &ProviderConfig) -> String {
        let base = config
            .base_url
            .as_deref()
            .unwrap_or(OPENAI_DEFAULT_BASE_URL)
            .trim_end_matches('/');
        format!("{}/v1/chat/completions", base)
    }
}

impl RequestConverter for OpenAIConverter {
    fn build_request(&self, config: &ProviderConfig, prompt: &str) -> Result<HttpRequest, Error> {
        if !config.has_api_key() {
            return Err(error::missing_api_key(ProviderKind::OpenAI));
        }

        let body = json!({
            "model": config.model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": true,
            "temperature": DEFAULT_TEMPERATURE,
        });

        Ok(HttpRequest {
            provider: ProviderKind::OpenAI,
            url: Self::chat_url(config),
            headers: create_headers(Some(&config.api_key))?,
            body,
        })
    }
}
