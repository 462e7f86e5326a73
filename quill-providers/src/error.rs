//! Provider-specific error constructors

use quill_core::{Error, ProviderKind};

/// The API key was empty when a stream was requested
pub fn missing_api_key(provider: ProviderKind) -> Error {
    Error::Configuration(format!("{} API key is missing", provider.display_name()))
}

/// Convert connect, DNS and TLS failures to transport errors
///
/// The request URL is stripped first; for Gemini it carries the API key.
pub fn network_error(provider: ProviderKind, error: reqwest::Error) -> Error {
    let error = error.without_url();
    Error::Transport {
        provider: provider.to_string(),
        status: error.status().map(|s| s.as_u16()),
        message: format!("{} URL Error: {}", provider.display_name(), error),
        source: Some(Box::new(error)),
    }
}

/// Convert a per-line decoding failure to a protocol error
pub fn protocol_error(provider: ProviderKind, error: serde_json::Error) -> Error {
    Error::Protocol {
        provider: provider.to_string(),
        message: format!("Failed to parse {} stream line: {}", provider.display_name(), error),
        source: Some(Box::new(error)),
    }
}

/// A provider-signalled refusal or abnormal finish
pub fn content_policy(provider: ProviderKind, message: impl Into<String>) -> Error {
    Error::ContentPolicy {
        provider: provider.to_string(),
        message: message.into(),
    }
}
