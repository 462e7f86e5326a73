//! Gemini provider implementation

mod converter;
mod parser;
mod provider;

pub use converter::GeminiConverter;
pub use parser::GeminiParser;
pub use provider::Gemini;
