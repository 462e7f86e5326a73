//! Streaming types for incremental responses

/// Events that can occur during streaming
///
/// Any number of `Text` events may arrive; `Done` and `Error` are terminal
/// and nothing follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A fragment of generated text
    Text(String),
    /// The provider finished the response
    Done,
    /// The stream failed; carries a human-readable message
    Error(String),
}

impl StreamEvent {
    /// Create a text event
    pub fn text(content: impl Into<String>) -> Self {
        StreamEvent::Text(content.into())
    }

    /// Create an error event
    pub fn error(message: impl Into<String>) -> Self {
        StreamEvent::Error(message.into())
    }

    /// Whether no further events may follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Done | StreamEvent::Error(_))
    }
}

/// Accumulates streaming events into a complete response
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    content: String,
    chunks: usize,
    error: Option<String>,
    finished: bool,
}

impl StreamAccumulator {
    /// Create a new accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a stream event
    ///
    /// Events arriving after a terminal event are ignored.
    pub fn process_event(&mut self, event: StreamEvent) {
        if self.is_finished() {
            return;
        }
        match event {
            StreamEvent::Text(text) => {
                self.content.push_str(&text);
                self.chunks += 1;
            }
            StreamEvent::Done => self.finished = true,
            StreamEvent::Error(message) => self.error = Some(message),
        }
    }

    /// Get the accumulated content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of text fragments received
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// The terminal error, if the stream failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a terminal event has been seen
    pub fn is_finished(&self) -> bool {
        self.finished || self.error.is_some()
    }

    /// Consume the accumulator, yielding the text or the terminal error
    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminal_events() {
        assert!(!StreamEvent::text("hi").is_terminal());
        assert!(StreamEvent::Done.is_terminal());
        assert!(StreamEvent::error("boom").is_terminal());
    }

    #[test]
    fn test_accumulator_concatenates_in_order() {
        let mut acc = StreamAccumulator::new();
        acc.process_event(StreamEvent::text("Hello"));
        acc.process_event(StreamEvent::text(", "));
        acc.process_event(StreamEvent::text("world"));
        acc.process_event(StreamEvent::Done);

        assert_eq!(acc.content(), "Hello, world");
        assert_eq!(acc.chunks(), 3);
        assert!(acc.is_finished());
        assert_eq!(acc.into_result(), Ok("Hello, world".to_string()));
    }

    #[test]
    fn test_accumulator_ignores_events_after_terminal() {
        let mut acc = StreamAccumulator::new();
        acc.process_event(StreamEvent::text("partial"));
        acc.process_event(StreamEvent::error("blocked"));
        acc.process_event(StreamEvent::text("late"));
        acc.process_event(StreamEvent::Done);

        assert_eq!(acc.content(), "partial");
        assert_eq!(acc.error(), Some("blocked"));
        assert_eq!(acc.into_result(), Err("blocked".to_string()));
    }
}
