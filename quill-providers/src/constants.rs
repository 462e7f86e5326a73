//! Constants for provider implementations

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default OpenAI model
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default Gemini base URL
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Prefix carried by every payload line in both framings
pub const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of a stream
pub const DONE_SENTINEL: &str = "[DONE]";

/// Connect timeout for the default HTTP client, in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
