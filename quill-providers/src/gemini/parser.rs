//! Stream line decoding for Gemini

use crate::constants::{DATA_PREFIX, DONE_SENTINEL};
use crate::error;
use crate::traits::StreamEventParser;
use quill_core::{Error, ProviderKind, StreamEvent};
use serde::Deserialize;

/// Decodes Gemini SSE lines
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiParser;

impl StreamEventParser for GeminiParser {
    fn parse_line(&self, line: &str) -> Result<Vec<StreamEvent>, Error> {
        // Blank separators and `:` comments carry no payload
        if line.is_empty() || line.starts_with(':') {
            return Ok(Vec::new());
        }
        let Some(data) = line.strip_prefix(DATA_PREFIX) else {
            return Ok(Vec::new());
        };

        if data == DONE_SENTINEL {
            return Ok(vec![StreamEvent::Done]);
        }

        let chunk: StreamChunk =
            serde_json::from_str(data).map_err(|e| error::protocol_error(ProviderKind::Gemini, e))?;

        let Some(candidate) = chunk.candidates.into_iter().next() else {
            return Ok(Vec::new());
        };

        let mut events: Vec<StreamEvent> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .filter(|text| !text.is_empty())
            .map(StreamEvent::Text)
            .collect();

        if let Some(err) = candidate.finish_reason.as_deref().and_then(finish_reason_error) {
            events.push(StreamEvent::Error(err.user_message().to_string()));
        }

        if candidate.safety_ratings.iter().any(SafetyRating::is_blocking) {
            let err = error::content_policy(
                ProviderKind::Gemini,
                "Gemini: Response blocked due to safety concerns",
            );
            events.push(StreamEvent::Error(err.user_message().to_string()));
        }

        Ok(events)
    }
}

/// Map an abnormal finish reason to a content policy error
///
/// `STOP` is a normal finish; reasons other than the three below pass
/// silently.
fn finish_reason_error(reason: &str) -> Option<Error> {
    let message = match reason {
        "SAFETY" => "Gemini: Response blocked by safety filters",
        "OTHER" => "Gemini: Response terminated unexpectedly",
        "MAX_TOKENS" => "Gemini: Response exceeded maximum token limit",
        _ => return None,
    };
    Some(error::content_policy(ProviderKind::Gemini, message))
}

// Streaming structures
#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct SafetyRating {
    probability: Option<String>,
}

impl SafetyRating {
    fn is_blocking(&self) -> bool {
        matches!(self.probability.as_deref(), Some("HIGH" | "MEDIUM"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Result<Vec<StreamEvent>, Error> {
        GeminiParser.parse_line(line)
    }

    #[test]
    fn test_text_parts() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hello"},{"text":""},{"text":" world"}],"role":"model"}}]}"#;
        assert_eq!(
            parse(line).unwrap(),
            vec![StreamEvent::text("Hello"), StreamEvent::text(" world")]
        );
    }

    #[test]
    fn test_stop_finish_is_silent() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"bye"}]},"finishReason":"STOP","safetyRatings":[{"category":"HARM_CATEGORY_HARASSMENT","probability":"NEGLIGIBLE"}]}]}"#;
        assert_eq!(parse(line).unwrap(), vec![StreamEvent::text("bye")]);
    }

    #[test]
    fn test_finish_reasons() {
        let cases = [
            ("SAFETY", Some("Gemini: Response blocked by safety filters")),
            ("OTHER", Some("Gemini: Response terminated unexpectedly")),
            ("MAX_TOKENS", Some("Gemini: Response exceeded maximum token limit")),
            ("RECITATION", None),
        ];
        for (reason, expected) in cases {
            let line = format!(r#"data: {{"candidates":[{{"finishReason":"{}"}}]}}"#, reason);
            let events = parse(&line).unwrap();
            let expected: Vec<StreamEvent> = expected.map(StreamEvent::error).into_iter().collect();
            assert_eq!(events, expected, "finish reason {}", reason);
        }
    }

    #[test]
    fn test_safety_finish_follows_text() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"partial"}]},"finishReason":"SAFETY"}]}"#;
        assert_eq!(
            parse(line).unwrap(),
            vec![
                StreamEvent::text("partial"),
                StreamEvent::error("Gemini: Response blocked by safety filters"),
            ]
        );
    }

    #[test]
    fn test_safety_ratings_fire_independently() {
        let line = r#"data: {"candidates":[{"finishReason":"SAFETY","safetyRatings":[{"category":"HARM_CATEGORY_DANGEROUS_CONTENT","probability":"MEDIUM"}]}]}"#;
        assert_eq!(
            parse(line).unwrap(),
            vec![
                StreamEvent::error("Gemini: Response blocked by safety filters"),
                StreamEvent::error("Gemini: Response blocked due to safety concerns"),
            ]
        );

        let line = r#"data: {"candidates":[{"safetyRatings":[{"probability":"LOW"},{"probability":"HIGH"}]}]}"#;
        assert_eq!(
            parse(line).unwrap(),
            vec![StreamEvent::error("Gemini: Response blocked due to safety concerns")]
        );
    }

    #[test]
    fn test_framing_lines() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(": ping").unwrap().is_empty());
        assert!(parse("event: message").unwrap().is_empty());
        assert_eq!(parse("data: [DONE]").unwrap(), vec![StreamEvent::Done]);
    }

    #[test]
    fn test_missing_candidates() {
        assert!(parse(r#"data: {"usageMetadata":{"promptTokenCount":3}}"#).unwrap().is_empty());
        assert!(parse(r#"data: {"candidates":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_protocol_error() {
        assert!(matches!(parse("data: {\"candidates\":"), Err(Error::Protocol { .. })));
        assert!(matches!(
            parse(r#"data: {"candidates":"nope"}"#),
            Err(Error::Protocol { .. })
        ));
    }
}
