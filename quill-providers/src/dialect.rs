//! Closed dispatch from a provider selector to its wire format
//!
//! Every [`ProviderKind`] variant supplies the same pair of capabilities:
//! building the outbound request and decoding one response line. Adding a
//! provider means adding a variant, and the compiler points at every match
//! that needs an arm.

use crate::gemini::{GeminiConverter, GeminiParser};
use crate::http::HttpRequest;
use crate::openai::{OpenAIConverter, OpenAIParser};
use crate::traits::{RequestConverter, StreamEventParser};
use quill_core::{Error, ProviderConfig, ProviderKind, StreamEvent};
use tracing::debug;

/// The request/decode capability pair of a provider's wire format
pub trait Dialect {
    /// Build the outbound request for `prompt`
    fn build_request(&self, config: &ProviderConfig, prompt: &str) -> Result<HttpRequest, Error>;

    /// Decode one framing line, skipping it if it cannot be understood
    fn decode_line(&self, line: &str) -> Vec<StreamEvent>;
}

impl Dialect for ProviderKind {
    fn build_request(&self, config: &ProviderConfig, prompt: &str) -> Result<HttpRequest, Error> {
        match self {
            ProviderKind::OpenAI => OpenAIConverter.build_request(config, prompt),
            ProviderKind::Gemini => GeminiConverter.build_request(config, prompt),
        }
    }

    fn decode_line(&self, line: &str) -> Vec<StreamEvent> {
        let decoded = match self {
            ProviderKind::OpenAI => OpenAIParser.parse_line(line),
            ProviderKind::Gemini => GeminiParser.parse_line(line),
        };
        decoded.unwrap_or_else(|e| {
            debug!(provider = %self, error = %e, "skipping undecodable line");
            Vec::new()
        })
    }
}
