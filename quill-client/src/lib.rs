//! High-level streaming client
//!
//! [`Client`] runs one streaming call per [`StreamRequest`](quill_core::StreamRequest)
//! and hands every event to an [`EventSink`], either inline or through a
//! channel drained by the caller on its own schedule. [`SettingsStore`]
//! loads and saves the per-provider configuration as a JSON file.

#![warn(missing_docs)]

mod client;
mod dispatcher;
mod settings;

pub use client::{Client, StreamHandle};
pub use dispatcher::{ChannelSink, Dispatcher, EventSink, FnSink};
pub use settings::{Settings, SettingsError, SettingsStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Client, EventSink, Settings, SettingsStore};
    pub use quill_core::{ProviderConfig, ProviderKind, StreamEvent, StreamRequest};
}
