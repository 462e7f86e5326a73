//! OpenAI provider implementation
//!
//! Streams chat completions from `POST /v1/chat/completions`. The response
//! is a sequence of `data: <json>` lines closed by `data: [DONE]`.

use crate::http::{HttpClient, ReqwestClient};
use crate::stream::ProviderStream;
use async_trait::async_trait;
use quill_core::{Error, Provider, ProviderConfig, ProviderKind};
use std::sync::Arc;

/// OpenAI provider for streaming chat completions
///
/// # Example
///
/// ```no_run
/// use quill_core::{Provider, ProviderConfig};
/// use quill_providers::OpenAI;
/// use futures::StreamExt;
///
/// # async fn example() -> Result<(), quill_core::Error> {
/// let provider = OpenAI::with_config(ProviderConfig::new("sk-...", "gpt-4o-mini"))?;
/// let mut stream = provider.stream("Tell me a joke").await?;
/// while let Some(event) = stream.next().await {
///     println!("{:?}", event);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: ProviderConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { client, config }
    }

    /// Create a new OpenAI provider backed by the default HTTP client
    pub fn with_config(config: ProviderConfig) -> Result<Self, Error> {
        Ok(Self::new(config, Arc::new(ReqwestClient::new()?)))
    }
}

#[async_trait]
impl Provider for OpenAI {
    type Stream = ProviderStream;

    async fn stream(&self, prompt: &str) -> Result<Self::Stream, Error> {
        let client = self.client.as_ref();
        ProviderStream::open(client, ProviderKind::OpenAI, &self.config, prompt).await
    }
}
