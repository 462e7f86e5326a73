//! Streaming response decoding shared by all providers

use crate::dialect::Dialect;
use crate::http::{HttpClient, ResponseStream};
use crate::line_reader::LineReader;
use crate::utils::{check_response_status, redact_key};
use futures::Stream;
use quill_core::{Error, ProviderConfig, ProviderKind, StreamEvent};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, trace, warn};

/// A live provider response decoded into [`StreamEvent`]s
///
/// Lines are decoded in arrival order by the provider's [`Dialect`]. The
/// stream yields at most one terminal event and ends right after it. When
/// the body ends without a sentinel, or the connection drops mid-stream, a
/// final `Done` is yielded.
pub struct ProviderStream {
    inner: ResponseStream,
    reader: LineReader,
    dialect: ProviderKind,
    events: VecDeque<StreamEvent>,
    terminated: bool,
}

impl ProviderStream {
    /// Create a new provider stream over a response body
    pub fn new(inner: ResponseStream, dialect: ProviderKind) -> Self {
        Self {
            inner,
            reader: LineReader::new(),
            dialect,
            events: VecDeque::new(),
            terminated: false,
        }
    }

    /// Send the request for `prompt` and stream the successful response
    ///
    /// Configuration problems are reported before any request is made;
    /// connection failures and non-success statuses are returned as errors.
    pub async fn open(
        client: &dyn HttpClient,
        dialect: ProviderKind,
        config: &ProviderConfig,
        prompt: &str,
    ) -> Result<Self, Error> {
        let request = dialect.build_request(config, prompt)?;
        debug!(
            provider = %dialect,
            url = %redact_key(&request.url),
            model = %config.model,
            "opening stream"
        );

        let response = client.post_stream(request).await?;
        let body = check_response_status(response, dialect).await?;

        Ok(Self::new(body, dialect))
    }

    /// Decode a chunk of body bytes, queueing events up to the first terminal one
    fn feed(&mut self, chunk: &[u8]) {
        for line in self.reader.push(chunk) {
            for event in self.dialect.decode_line(&line) {
                let terminal = event.is_terminal();
                self.events.push_back(event);
                if terminal {
                    self.terminate();
                    return;
                }
            }
        }
    }

    fn terminate(&mut self) {
        self.terminated = true;
        let dropped = self.reader.discard();
        if dropped > 0 {
            trace!(provider = %self.dialect, dropped, "discarding bytes after terminal event");
        }
    }

    fn finish(&mut self) {
        let dropped = self.reader.discard();
        if dropped > 0 {
            debug!(provider = %self.dialect, dropped, "discarding unterminated final line");
        }
        self.events.push_back(StreamEvent::Done);
        self.terminated = true;
    }
}

impl Stream for ProviderStream {
    type Item = StreamEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(event) = self.events.pop_front() {
                return Poll::Ready(Some(event));
            }
            if self.terminated {
                return Poll::Ready(None);
            }

            match self.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => self.feed(&chunk),
                Poll::Ready(Some(Err(e))) => {
                    // A dropped connection ends the stream like a clean close.
                    warn!(provider = %self.dialect, error = %e, "connection closed mid-stream");
                    self.finish();
                }
                Poll::Ready(None) => self.finish(),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    fn delta(text: &str) -> String {
        format!("data: {{\"choices\":[{{\"delta\":{{\"content\":\"{}\"}}}}]}}\n", text)
    }

    fn body(chunks: Vec<Result<String, Error>>) -> ResponseStream {
        Box::pin(futures::stream::iter(
            chunks.into_iter().map(|c| c.map(Bytes::from)),
        ))
    }

    async fn collect(chunks: Vec<Result<String, Error>>) -> Vec<StreamEvent> {
        ProviderStream::new(body(chunks), ProviderKind::OpenAI)
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_events_in_order_across_chunks() {
        let all = format!("{}{}data: [DONE]\n", delta("a"), delta("b"));
        let (first, rest) = all.split_at(10);
        let (second, third) = rest.split_at(50);
        let events = collect(vec![
            Ok(first.to_string()),
            Ok(second.to_string()),
            Ok(third.to_string()),
        ])
        .await;
        assert_eq!(
            events,
            vec![StreamEvent::text("a"), StreamEvent::text("b"), StreamEvent::Done]
        );
    }

    #[tokio::test]
    async fn test_nothing_after_terminal() {
        let events = collect(vec![
            Ok(format!("{}data: [DONE]\n{}", delta("a"), delta("late"))),
            Ok(delta("later")),
        ])
        .await;
        assert_eq!(events, vec![StreamEvent::text("a"), StreamEvent::Done]);
    }

    #[tokio::test]
    async fn test_bad_line_is_skipped() {
        let events = collect(vec![Ok(format!(
            "{}data: {{oops\n{}data: [DONE]\n",
            delta("a"),
            delta("b")
        ))])
        .await;
        assert_eq!(
            events,
            vec![StreamEvent::text("a"), StreamEvent::text("b"), StreamEvent::Done]
        );
    }

    #[tokio::test]
    async fn test_end_of_body_yields_done_and_drops_fragment() {
        let events = collect(vec![Ok(format!("{}data: [DO", delta("a")))]).await;
        assert_eq!(events, vec![StreamEvent::text("a"), StreamEvent::Done]);
    }

    #[tokio::test]
    async fn test_disconnect_is_treated_as_end_of_stream() {
        let events = collect(vec![
            Ok(delta("a")),
            Err(Error::Transport {
                provider: "openai".into(),
                status: None,
                message: "connection reset".into(),
                source: None,
            }),
            Ok(delta("never")),
        ])
        .await;
        assert_eq!(events, vec![StreamEvent::text("a"), StreamEvent::Done]);
    }

    #[tokio::test]
    async fn test_gemini_finish_and_safety_yield_one_error() {
        let line = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"x\"}]},\"finishReason\":\"SAFETY\",\"safetyRatings\":[{\"probability\":\"HIGH\"}]}]}\n\n";
        let stream = ProviderStream::new(body(vec![Ok(line.to_string())]), ProviderKind::Gemini);
        let events: Vec<StreamEvent> = stream.collect().await;
        assert_eq!(
            events,
            vec![
                StreamEvent::text("x"),
                StreamEvent::error("Gemini: Response blocked by safety filters"),
            ]
        );
    }
}
