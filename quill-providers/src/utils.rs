//! Common utilities for provider implementations

use crate::http::{HttpResponse, ResponseStream};
use quill_core::{Error, ProviderKind};
use serde_json::Value;
use tracing::debug;

/// Check the HTTP status and convert failures to transport errors
///
/// On success the live body is handed back untouched. On failure the body
/// is read and folded into the message, the way each provider reports it.
pub async fn check_response_status(
    response: HttpResponse,
    provider: ProviderKind,
) -> Result<ResponseStream, Error> {
    if response.is_success() {
        return Ok(response.body);
    }

    let status = response.status;
    let body = response.text().await;
    debug!(%provider, status, "provider rejected request");

    Err(Error::Transport {
        provider: provider.to_string(),
        status: Some(status),
        message: http_error_message(provider, status, &body),
        source: None,
    })
}

/// Format the user-facing message for a non-success response
pub fn http_error_message(provider: ProviderKind, status: u16, body: &str) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");
    let mut message = format!("{} HTTP Error: {} - {}", provider.display_name(), status, reason);

    let body = body.trim();
    if body.is_empty() {
        return message;
    }

    match provider {
        ProviderKind::Gemini => {
            // Gemini wraps failures as {"error": {"message": ...}}; non-JSON bodies are dropped
            if let Ok(value) = serde_json::from_str::<Value>(body) {
                match value.get("error") {
                    Some(err) => {
                        let details = err
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("Unknown error");
                        message.push_str("\nDetails: ");
                        message.push_str(details);
                    }
                    None => {
                        message.push_str("\nResponse: ");
                        message.push_str(body);
                    }
                }
            }
        }
        ProviderKind::OpenAI => {
            message.push_str("\nResponse: ");
            message.push_str(body);
        }
    }

    message
}

/// Replace the value of a `key` query parameter for logging
pub fn redact_key(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(k, v)| {
                    let v = if k == "key" { "REDACTED".to_string() } else { v.into_owned() };
                    (k.into_owned(), v)
                })
                .collect();
            if pairs.is_empty() {
                return parsed.to_string();
            }
            parsed.query_pairs_mut().clear().extend_pairs(pairs);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}
