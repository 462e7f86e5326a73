//! Stream line decoding for OpenAI

use crate::constants::{DATA_PREFIX, DONE_SENTINEL};
use crate::error;
use crate::traits::StreamEventParser;
use quill_core::{Error, ProviderKind, StreamEvent};
use serde::Deserialize;

/// Decodes OpenAI `data:` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIParser;

impl StreamEventParser for OpenAIParser {
    fn parse_line(&self, line: &str) -> Result<Vec<StreamEvent>, Error> {
        let Some(json_str) = line.strip_prefix(DATA_PREFIX) else {
            return Ok(Vec::new());
        };

        if json_str == DONE_SENTINEL {
            return Ok(vec![StreamEvent::Done]);
        }

        let chunk: StreamChunk = serde_json::from_str(json_str)
            .map_err(|e| error::protocol_error(ProviderKind::OpenAI, e))?;

        Ok(chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
            .map(StreamEvent::Text)
            .into_iter()
            .collect())
    }
}

// Streaming structures
#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: DeltaContent,
}

#[derive(Deserialize, Default)]
struct DeltaContent {
    content: Option<String>,
}
