//! Tests for core types

use quill::*;

#[test]
fn test_stream_request_constructors() {
    let config = ProviderConfig::new("key", "gpt-4o-mini");
    let request = StreamRequest::openai(config.clone(), "Hello");
    assert_eq!(request.provider, ProviderKind::OpenAI);
    assert_eq!(request.config, config);
    assert_eq!(request.prompt, "Hello");

    let request = StreamRequest::gemini(ProviderConfig::new("key", "gemini-2.5-flash"), "Hi");
    assert_eq!(request.provider, ProviderKind::Gemini);
}

#[test]
fn test_provider_kind_round_trip_through_str() {
    for kind in [ProviderKind::OpenAI, ProviderKind::Gemini] {
        assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
    }
    assert_eq!(ProviderKind::OpenAI.display_name(), "OpenAI");
    assert_eq!(ProviderKind::Gemini.display_name(), "Gemini");
}

#[test]
fn test_unconfigured_provider_is_valid_until_used() {
    let config = ProviderConfig::default();
    assert!(!config.has_api_key());
    let request = StreamRequest::openai(config, "prompt");
    assert!(request.config.api_key.is_empty());
}

#[test]
fn test_accumulator_stops_at_first_terminal() {
    let mut acc = StreamAccumulator::new();
    for event in [
        StreamEvent::text("a"),
        StreamEvent::text("b"),
        StreamEvent::Done,
        StreamEvent::text("c"),
    ] {
        acc.process_event(event);
    }
    assert_eq!(acc.content(), "ab");
    assert!(acc.is_finished());
    assert!(acc.error().is_none());
}
