//! Request building for Gemini

use crate::constants::{DEFAULT_TEMPERATURE, GEMINI_DEFAULT_BASE_URL};
use crate::error;
use crate::http::{create_headers, HttpRequest};
use crate::traits::RequestConverter;
use quill_core::{Error, ProviderConfig, ProviderKind};
use serde_json::json;
use url::Url;

/// Builds Gemini `streamGenerateContent` requests
///
/// The API key travels as the `key` query parameter; no auth header is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiConverter;

impl GeminiConverter {
    /// Get the SSE streaming URL for the configured model
    pub fn stream_url(config: &ProviderConfig) -> Result<String, Error> {
        let base = config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{}/v1beta/models/{}:streamGenerateContent",
            base, config.model
        ))
        .map_err(|e| Error::Configuration(format!("Invalid Gemini endpoint: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("alt", "sse")
            .append_pair("key", &config.api_key);

        Ok(url.into())
    }
}

impl RequestConverter for GeminiConverter {
    fn build_request(&self, config: &ProviderConfig, prompt: &str) -> Result<HttpRequest, Error> {
        if !config.has_api_key() {
            return Err(error::missing_api_key(ProviderKind::Gemini));
        }

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"temperature": DEFAULT_TEMPERATURE},
        });

        Ok(HttpRequest {
            provider: ProviderKind::Gemini,
            url: Self::stream_url(config)?,
            headers: create_headers(None)?,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_request_shape() {
        let config = ProviderConfig::new("g-key", "gemini-2.5-flash");
        let request = GeminiConverter.build_request(&config, "Hello").unwrap();

        assert_eq!(
            request.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:streamGenerateContent?alt=sse&key=g-key"
        );
        assert!(request.headers.get(AUTHORIZATION).is_none());
        assert_eq!(
            request.body,
            json!({
                "contents": [{"parts": [{"text": "Hello"}]}],
                "generationConfig": {"temperature": 0.7},
            })
        );
    }

    #[test]
    fn test_key_is_query_encoded() {
        let config = ProviderConfig::new("a&b=c", "gemini-2.5-flash");
        let url = GeminiConverter::stream_url(&config).unwrap();
        assert!(url.ends_with("alt=sse&key=a%26b%3Dc"));
    }

    #[test]
    fn test_missing_api_key() {
        let config = ProviderConfig::new("   ", "gemini-2.5-flash");
        let err = GeminiConverter.build_request(&config, "Hello").unwrap_err();
        assert_eq!(err.user_message(), "Gemini API key is missing");
    }
}
