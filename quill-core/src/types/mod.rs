//! Shared data types

pub mod config;
pub mod request;
pub mod stream;
