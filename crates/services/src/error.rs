//! Shared error types for the services crate.

use thiserror::Error;

/// Errors reported by an `AudioSink`. The `Audio` wrapper logs and drops them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AudioError {
    #[error("no audio backend is available")]
    Unavailable,
    #[error("audio backend rejected playback: {0}")]
    Rejected(String),
}
