//! Error types for the Quill client

use std::error::Error as StdError;
use std::fmt;

/// The main error type for all Quill operations
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The call could not be started with the given configuration
    ///
    /// Raised before any network I/O, e.g. for a missing API key.
    Configuration(String),

    /// Connection-level failures and non-success HTTP responses
    Transport {
        /// Provider name (e.g., "openai", "gemini")
        provider: String,
        /// HTTP status code, when the server answered
        status: Option<u16>,
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// A single streamed line could not be understood
    ///
    /// These are recovered locally by skipping the line and are never
    /// delivered to the caller as a stream error.
    Protocol {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
        /// Underlying error if available
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The provider refused or cut short the response
    ContentPolicy {
        /// Provider name
        provider: String,
        /// Human-readable cause
        message: String,
    },

    /// Persisted settings could not be read or written
    Settings(String),
}

impl Error {
    /// HTTP status attached to a transport error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// The message a caller should present to the user
    ///
    /// Unlike `Display`, this omits the category prefix so that provider
    /// wording reaches the user unchanged.
    pub fn user_message(&self) -> &str {
        match self {
            Error::Configuration(msg) | Error::Settings(msg) => msg,
            Error::Transport { message, .. }
            | Error::Protocol { message, .. }
            | Error::ContentPolicy { message, .. } => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Transport {
                provider,
                status: Some(status),
                message,
                ..
            } => write!(f, "Transport error ({}, HTTP {}): {}", provider, status, message),
            Error::Transport {
                provider, message, ..
            } => write!(f, "Transport error ({}): {}", provider, message),
            Error::Protocol {
                provider, message, ..
            } => write!(f, "Protocol error ({}): {}", provider, message),
            Error::ContentPolicy { provider, message } => {
                write!(f, "Content policy error ({}): {}", provider, message)
            }
            Error::Settings(msg) => write!(f, "Settings error: {}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Transport { source, .. } | Error::Protocol { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

/// Result type alias for Quill operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol {
            provider: String::new(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
