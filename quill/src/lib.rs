//! Quill - streaming text from LLM provider APIs
//!
//! Quill opens a streaming request against OpenAI or Gemini, reassembles
//! the response body into lines as bytes arrive and turns each line into
//! provider-agnostic events: any number of `Text` fragments followed by a
//! single `Done` or `Error`.
//!
//! # Quick Start
//!
//! ```no_run
//! # use quill::prelude::*;
//! #
//! # #[tokio::main]
//! # async fn main() -> quill::Result<()> {
//! let client = Client::new()?;
//! let request = StreamRequest::gemini(
//!     ProviderConfig::new("your-api-key", "gemini-2.5-flash"),
//!     "Write a haiku about rivers",
//! );
//!
//! let mut handle = client.spawn(request);
//! while let Some(event) = handle.recv().await {
//!     if let StreamEvent::Text(text) = event {
//!         print!("{}", text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use quill_core::*;

#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Provider implementations
    pub use quill_providers::*;
}

#[cfg(feature = "client")]
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
pub mod client {
    //! Streaming client, event dispatch and settings
    pub use quill_client::*;
}

#[cfg(feature = "client")]
pub use quill_client::{Client, EventSink, Settings, SettingsStore, StreamHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use quill_core::{
        Error, Provider, ProviderConfig, ProviderKind, Result, StreamEvent, StreamRequest,
    };

    #[cfg(feature = "client")]
    pub use quill_client::{Client, EventSink, Settings, SettingsStore};
}
