//! Common traits for provider implementations

use crate::http::HttpRequest;
use quill_core::{Error, ProviderConfig, StreamEvent};

/// Build the provider-specific outbound request
pub trait RequestConverter: Send + Sync {
    /// Build the request for `prompt`, failing before any I/O if the
    /// configuration cannot be used
    fn build_request(&self, config: &ProviderConfig, prompt: &str) -> Result<HttpRequest, Error>;
}

/// Decode streamed framing lines
///
/// Implementations are pure: the same line always yields the same events.
pub trait StreamEventParser: Send + Sync {
    /// Decode one framing line into zero or more events
    ///
    /// An `Err` marks a line that could not be understood; callers skip it
    /// and keep reading.
    fn parse_line(&self, line: &str) -> Result<Vec<StreamEvent>, Error>;
}
