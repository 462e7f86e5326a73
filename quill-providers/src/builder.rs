//! Construction of a provider from a runtime selector
//!
//! [`AnyProvider`] is the closed set of concrete providers behind one
//! [`Provider`] implementation, so callers holding only a [`ProviderKind`]
//! can stream without naming the concrete type.
//!
//! # Examples
//!
//! ```no_run
//! use quill_core::{Provider, ProviderConfig, ProviderKind};
//! use quill_providers::AnyProvider;
//!
//! # async fn example() -> Result<(), quill_core::Error> {
//! let config = ProviderConfig::new("api-key", "gemini-2.5-flash");
//! let provider = AnyProvider::with_config(ProviderKind::Gemini, config)?;
//! let stream = provider.stream("Hello").await?;
//! # Ok(())
//! # }
//! ```

use crate::gemini::Gemini;
use crate::http::{HttpClient, ReqwestClient};
use crate::openai::OpenAI;
use crate::stream::ProviderStream;
use async_trait::async_trait;
use quill_core::{Error, Provider, ProviderConfig, ProviderKind};
use std::sync::Arc;

/// One of the supported providers
#[derive(Clone)]
pub enum AnyProvider {
    /// OpenAI chat completions
    OpenAI(OpenAI),
    /// Gemini content generation
    Gemini(Gemini),
}

impl AnyProvider {
    /// Build the provider selected by `kind`
    pub fn new(kind: ProviderKind, config: ProviderConfig, client: Arc<dyn HttpClient>) -> Self {
        match kind {
            ProviderKind::OpenAI => AnyProvider::OpenAI(OpenAI::new(config, client)),
            ProviderKind::Gemini => AnyProvider::Gemini(Gemini::new(config, client)),
        }
    }

    /// Build the provider selected by `kind` with the default HTTP client
    pub fn with_config(kind: ProviderKind, config: ProviderConfig) -> Result<Self, Error> {
        Ok(Self::new(kind, config, Arc::new(ReqwestClient::new()?)))
    }
}

#[async_trait]
impl Provider for AnyProvider {
    type Stream = ProviderStream;

    async fn stream(&self, prompt: &str) -> Result<Self::Stream, Error> {
        match self {
            AnyProvider::OpenAI(provider) => provider.stream(prompt).await,
            AnyProvider::Gemini(provider) => provider.stream(prompt).await,
        }
    }
}
