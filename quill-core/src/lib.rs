//! Core types for the Quill streaming client
//!
//! This crate holds the provider-agnostic vocabulary shared by the provider
//! decoders and the client: the error taxonomy, provider configuration, the
//! per-call request and the events delivered while a response streams in.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use provider::Provider;
pub use types::{
    config::{ProviderConfig, ProviderKind},
    request::StreamRequest,
    stream::{StreamAccumulator, StreamEvent},
};
