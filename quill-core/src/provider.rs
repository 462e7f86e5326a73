//! Core provider trait for streaming LLM interactions

use crate::error::Result;
use crate::types::stream::StreamEvent;
use async_trait::async_trait;

/// The capability every streaming provider exposes
///
/// Opening the stream is fallible: configuration problems and connection
/// failures are returned as `Err` before any event is produced. Once the
/// stream is open, every further condition (text, provider-signalled errors,
/// completion) travels through the stream itself as a [`StreamEvent`].
#[async_trait]
pub trait Provider: Send + Sync {
    /// The stream type returned by this provider
    type Stream: futures_core::Stream<Item = StreamEvent> + Send + Unpin;

    /// Send `prompt` to the provider and return the live event stream
    async fn stream(&self, prompt: &str) -> Result<Self::Stream>;
}
