//! Provider implementations for streaming LLM services
//!
//! Each provider pairs a [`RequestConverter`] that builds the outbound
//! request with a [`StreamEventParser`] that decodes one framing line at a
//! time. [`Dialect`] selects the pair for a [`ProviderKind`](quill_core::ProviderKind)
//! and [`ProviderStream`] drives it over a live byte stream.

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod dialect;
pub mod error;
pub mod http;
pub mod line_reader;
pub mod stream;
pub mod traits;
pub mod utils;

// Provider implementations
pub mod gemini;
pub mod openai;

// Re-export provider types
pub use builder::AnyProvider;
pub use gemini::Gemini;
pub use openai::OpenAI;

// Re-export common traits
pub use dialect::Dialect;
pub use line_reader::LineReader;
pub use stream::ProviderStream;
pub use traits::{RequestConverter, StreamEventParser};
