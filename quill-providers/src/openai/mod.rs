//! OpenAI provider implementation

mod converter;
mod parser;
mod provider;

pub use converter::OpenAIConverter;
pub use parser::OpenAIParser;
pub use provider::OpenAI;
