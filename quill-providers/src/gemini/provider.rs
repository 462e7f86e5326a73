//! Gemini provider implementation
//!
//! Streams from `POST /v1beta/models/{model}:streamGenerateContent?alt=sse`
//! using Server-Sent Events framing.

use crate::http::{HttpClient, ReqwestClient};
use crate::stream::ProviderStream;
use async_trait::async_trait;
use quill_core::{Error, Provider, ProviderConfig, ProviderKind};
use std::sync::Arc;

/// Gemini provider for streaming content generation
#[derive(Clone)]
pub struct Gemini {
    client: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl Gemini {
    /// Create a new Gemini provider with the given configuration and client
    pub fn new(config: ProviderConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { client, config }
    }

    /// Create a new Gemini provider backed by the default HTTP client
    pub fn with_config(config: ProviderConfig) -> Result<Self, Error> {
        Ok(Self::new(config, Arc::new(ReqwestClient::new()?)))
    }
}

#[async_trait]
impl Provider for Gemini {
    type Stream = ProviderStream;

    async fn stream(&self, prompt: &str) -> Result<Self::Stream, Error> {
        let client = self.client.as_ref();
        ProviderStream::open(client, ProviderKind::Gemini, &self.config, prompt).await
    }
}
