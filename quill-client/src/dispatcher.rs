//! Delivery of stream events to the caller

use quill_core::{StreamAccumulator, StreamEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

/// Receiver of the three-event streaming contract
///
/// `on_text` may be called any number of times, in provider order. After
/// `on_error` or `on_done` nothing else is called for that stream.
pub trait EventSink: Send {
    /// A fragment of generated text arrived
    fn on_text(&mut self, content: String);

    /// The stream failed
    fn on_error(&mut self, message: String);

    /// The stream completed
    fn on_done(&mut self);
}

/// Enforces the terminal contract in front of an [`EventSink`]
pub struct Dispatcher<'a, S: EventSink + ?Sized> {
    sink: &'a mut S,
    terminated: bool,
    texts: usize,
}

impl<'a, S: EventSink + ?Sized> Dispatcher<'a, S> {
    /// Wrap a sink for one stream
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            terminated: false,
            texts: 0,
        }
    }

    /// Forward an event; returns `false` once the stream is terminated
    pub fn dispatch(&mut self, event: StreamEvent) -> bool {
        if self.terminated {
            trace!(?event, "dropping event after terminal");
            return false;
        }
        match event {
            StreamEvent::Text(content) => {
                self.texts += 1;
                self.sink.on_text(content);
            }
            StreamEvent::Done => {
                self.terminated = true;
                self.sink.on_done();
            }
            StreamEvent::Error(message) => {
                self.terminated = true;
                self.sink.on_error(message);
            }
        }
        !self.terminated
    }

    /// Close the stream with `on_done` unless it already terminated
    pub fn finish(&mut self) {
        self.dispatch(StreamEvent::Done);
    }

    /// Whether a terminal event has been delivered
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Number of text events delivered so far
    pub fn texts(&self) -> usize {
        self.texts
    }
}

/// Forwards events into an unbounded channel
///
/// The receiving side can be drained from whatever context owns the UI,
/// without the stream loop waiting on it.
pub struct ChannelSink {
    tx: UnboundedSender<StreamEvent>,
}

impl ChannelSink {
    /// Create a sink sending into `tx`
    pub fn new(tx: UnboundedSender<StreamEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: StreamEvent) {
        if self.tx.send(event).is_err() {
            trace!("event receiver dropped");
        }
    }
}

impl EventSink for ChannelSink {
    fn on_text(&mut self, content: String) {
        self.send(StreamEvent::Text(content));
    }

    fn on_error(&mut self, message: String) {
        self.send(StreamEvent::Error(message));
    }

    fn on_done(&mut self) {
        self.send(StreamEvent::Done);
    }
}

/// Adapts a closure taking [`StreamEvent`]s into an [`EventSink`]
pub struct FnSink<F>(pub F);

impl<F: FnMut(StreamEvent) + Send> EventSink for FnSink<F> {
    fn on_text(&mut self, content: String) {
        (self.0)(StreamEvent::Text(content));
    }

    fn on_error(&mut self, message: String) {
        (self.0)(StreamEvent::Error(message));
    }

    fn on_done(&mut self) {
        (self.0)(StreamEvent::Done);
    }
}

impl EventSink for Vec<StreamEvent> {
    fn on_text(&mut self, content: String) {
        self.push(StreamEvent::Text(content));
    }

    fn on_error(&mut self, message: String) {
        self.push(StreamEvent::Error(message));
    }

    fn on_done(&mut self) {
        self.push(StreamEvent::Done);
    }
}

impl EventSink for StreamAccumulator {
    fn on_text(&mut self, content: String) {
        self.process_event(StreamEvent::Text(content));
    }

    fn on_error(&mut self, message: String) {
        self.process_event(StreamEvent::Error(message));
    }

    fn on_done(&mut self) {
        self.process_event(StreamEvent::Done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nothing_after_done() {
        let mut events: Vec<StreamEvent> = Vec::new();
        let mut dispatcher = Dispatcher::new(&mut events);
        assert!(dispatcher.dispatch(StreamEvent::text("a")));
        assert!(!dispatcher.dispatch(StreamEvent::Done));
        assert!(!dispatcher.dispatch(StreamEvent::text("late")));
        assert!(!dispatcher.dispatch(StreamEvent::error("late")));
        dispatcher.finish();
        assert_eq!(dispatcher.texts(), 1);

        assert_eq!(events, vec![StreamEvent::text("a"), StreamEvent::Done]);
    }

    #[test]
    fn test_error_is_terminal() {
        let mut events: Vec<StreamEvent> = Vec::new();
        let mut dispatcher = Dispatcher::new(&mut events);
        dispatcher.dispatch(StreamEvent::error("first"));
        dispatcher.dispatch(StreamEvent::error("second"));
        dispatcher.finish();
        assert!(dispatcher.is_terminated());

        assert_eq!(events, vec![StreamEvent::error("first")]);
    }

    #[test]
    fn test_finish_emits_done_once() {
        let mut events: Vec<StreamEvent> = Vec::new();
        let mut dispatcher = Dispatcher::new(&mut events);
        dispatcher.finish();
        dispatcher.finish();

        assert_eq!(events, vec![StreamEvent::Done]);
    }

    #[tokio::test]
    async fn test_channel_sink() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut sink = ChannelSink::new(tx);
        sink.on_text("hi".into());
        sink.on_done();
        drop(sink);

        assert_eq!(rx.recv().await, Some(StreamEvent::text("hi")));
        assert_eq!(rx.recv().await, Some(StreamEvent::Done));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_fn_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|event: StreamEvent| seen.push(event));
            sink.on_text("x".into());
            sink.on_error("y".into());
        }
        assert_eq!(seen, vec![StreamEvent::text("x"), StreamEvent::error("y")]);
    }
}
