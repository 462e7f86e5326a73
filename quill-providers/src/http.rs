//! HTTP client abstraction and utilities

use crate::constants::CONNECT_TIMEOUT_SECS;
use crate::error;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use quill_core::{Error, ProviderKind};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::pin::Pin;
use std::time::Duration;
use tracing::trace;

/// Type alias for response body streams
pub type ResponseStream = Pin<Box<dyn Stream<Item = Result<Bytes, Error>> + Send>>;

/// A fully built outbound request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Provider the request is addressed to
    pub provider: ProviderKind,
    /// Absolute endpoint URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// JSON body
    pub body: Value,
}

/// Status and live body of a response
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Body bytes as they arrive
    pub body: ResponseStream,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Drain the body into a string, e.g. to report an error response
    pub async fn text(self) -> String {
        let mut body = self.body;
        let mut bytes = Vec::new();
        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(chunk) => bytes.extend_from_slice(&chunk),
                Err(_) => break,
            }
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// HTTP client abstraction
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request and return the response without buffering its body
    async fn post_stream(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client
    ///
    /// Only the connect phase is bounded; a stream may stay open as long as
    /// the provider keeps it open.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post_stream(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let provider = request.provider;
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| error::network_error(provider, e))?;

        let status = response.status().as_u16();
        trace!(%provider, status, "response headers received");

        let body = response
            .bytes_stream()
            .map(move |chunk| chunk.map_err(|e| error::network_error(provider, e)));

        Ok(HttpResponse {
            status,
            body: Box::pin(body),
        })
    }
}

/// Helper to create common headers
///
/// With `bearer` set, an `Authorization: Bearer` header is added.
pub fn create_headers(bearer: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    if let Some(api_key) = bearer {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
