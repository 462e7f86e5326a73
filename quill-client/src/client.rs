//! High-level client implementation

use crate::dispatcher::{ChannelSink, Dispatcher, EventSink};
use crate::settings::Settings;
use futures::StreamExt;
use quill_core::{Error, Provider, StreamAccumulator, StreamEvent, StreamRequest};
use quill_providers::http::{HttpClient, ReqwestClient};
use quill_providers::AnyProvider;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Streaming client for LLM providers
///
/// The client holds no per-call state; every call receives its own
/// [`StreamRequest`] carrying the provider selection and configuration.
///
/// # Examples
///
/// ```no_run
/// use quill_client::Client;
/// use quill_core::{ProviderConfig, StreamEvent, StreamRequest};
///
/// # async fn example() -> Result<(), quill_core::Error> {
/// let client = Client::new()?;
/// let request = StreamRequest::openai(ProviderConfig::new("sk-...", "gpt-4o-mini"), "Hello");
///
/// let mut handle = client.spawn(request);
/// while let Some(event) = handle.recv().await {
///     match event {
///         StreamEvent::Text(text) => print!("{}", text),
///         StreamEvent::Error(message) => eprintln!("{}", message),
///         StreamEvent::Done => println!(),
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http: Arc<dyn HttpClient>,
}

impl Client {
    /// Create a client backed by the default HTTP client
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_http_client(Arc::new(ReqwestClient::new()?)))
    }

    /// Create a client with a custom HTTP client
    pub fn with_http_client(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Run one stream to completion, delivering events to `sink`
    ///
    /// Exactly one of `on_error` or `on_done` is delivered last. Failures
    /// before the first byte (missing key, connection or HTTP errors) arrive
    /// as a single `on_error`.
    pub async fn stream<S: EventSink + ?Sized>(&self, request: StreamRequest, sink: &mut S) {
        let mut dispatcher = Dispatcher::new(sink);
        let provider = AnyProvider::new(request.provider, request.config, self.http.clone());

        let mut events = match provider.stream(&request.prompt).await {
            Ok(events) => events,
            Err(e) => {
                warn!(
                    provider = %request.provider,
                    status = ?e.status(),
                    error = %e,
                    "stream could not be started"
                );
                dispatcher.dispatch(StreamEvent::Error(e.user_message().to_string()));
                return;
            }
        };

        while let Some(event) = events.next().await {
            if !dispatcher.dispatch(event) {
                break;
            }
        }
        dispatcher.finish();
        debug!(provider = %request.provider, texts = dispatcher.texts(), "stream finished");
    }

    /// Stream using the active provider from `settings`
    ///
    /// An unknown provider name is reported through `on_error`.
    pub async fn stream_with_settings<S: EventSink + ?Sized>(
        &self,
        settings: &Settings,
        prompt: impl Into<String>,
        sink: &mut S,
    ) {
        match settings.request(prompt) {
            Ok(request) => self.stream(request, sink).await,
            Err(e) => {
                warn!(error = %e, "no usable provider in settings");
                Dispatcher::new(sink).dispatch(StreamEvent::Error(e.user_message().to_string()));
            }
        }
    }

    /// Run the stream on a background task and deliver events through a channel
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(&self, request: StreamRequest) -> StreamHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = self.clone();
        info!(provider = %request.provider, model = %request.config.model, "spawning stream");

        let task = tokio::spawn(async move {
            let mut sink = ChannelSink::new(tx);
            client.stream(request, &mut sink).await;
        });

        StreamHandle { events: rx, task }
    }

    /// Stream and collect the whole response text
    ///
    /// Provider-signalled stream errors become [`Error::ContentPolicy`].
    pub async fn complete(&self, request: StreamRequest) -> Result<String, Error> {
        let kind = request.provider;
        let provider = AnyProvider::new(kind, request.config, self.http.clone());
        let mut events = provider.stream(&request.prompt).await?;

        let mut accumulator = StreamAccumulator::new();
        {
            let mut dispatcher = Dispatcher::new(&mut accumulator);
            while let Some(event) = events.next().await {
                if !dispatcher.dispatch(event) {
                    break;
                }
            }
            dispatcher.finish();
        }

        accumulator.into_result().map_err(|message| Error::ContentPolicy {
            provider: kind.to_string(),
            message,
        })
    }
}

/// A stream running on a background task
///
/// Dropping the handle leaves the task running until the provider closes
/// the connection; call [`abort`](Self::abort) to cut it short.
pub struct StreamHandle {
    events: UnboundedReceiver<StreamEvent>,
    task: JoinHandle<()>,
}

impl StreamHandle {
    /// Wait for the next event; `None` once the stream has ended
    pub async fn recv(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    /// Drain every event that is ready right now
    pub fn drain(&mut self) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    /// Cancel the stream by dropping its connection
    ///
    /// Events queued before the call can still be received; nothing is
    /// queued afterwards.
    pub fn abort(&mut self) {
        self.task.abort();
        self.events.close();
    }

    /// Whether the background task has stopped
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
