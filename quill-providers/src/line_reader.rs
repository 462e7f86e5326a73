//! Line reassembly for line-delimited streaming protocols

use tracing::trace;

/// Reassembles transport chunks into logical lines
///
/// Bytes are accumulated until a `\n` arrives; the accumulated bytes are then
/// decoded as UTF-8 and trimmed. Lines that are not valid UTF-8 are dropped.
/// The buffer never holds a `\n`.
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8>,
}

impl LineReader {
    /// Create a new line reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add data to the buffer and return the lines it completes
    ///
    /// The result depends only on the concatenation of all data fed so far,
    /// never on how it was split into chunks.
    pub fn push(&mut self, data: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = data;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            self.buffer.extend_from_slice(&rest[..pos]);
            let raw = std::mem::take(&mut self.buffer);
            match String::from_utf8(raw) {
                Ok(line) => lines.push(line.trim().to_string()),
                Err(e) => trace!(len = e.as_bytes().len(), "skipping line with invalid UTF-8"),
            }
            rest = &rest[pos + 1..];
        }
        self.buffer.extend_from_slice(rest);

        lines
    }

    /// Number of bytes waiting for a line terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Drop any partial line
    ///
    /// Providers always end with a newline-terminated sentinel, so a dangling
    /// fragment at end of stream is never meaningful.
    pub fn discard(&mut self) -> usize {
        let len = self.buffer.len();
        self.buffer.clear();
        len
    }
}
