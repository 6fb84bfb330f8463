//! Protocol error types.

use sdlrpc_core::CoreError;
use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while building or decoding messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Construction or strict access failed in the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The record form of a message did not (de)serialize.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProtocolError {
    /// Returns true if this is a malformed construction error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Core(CoreError::MalformedConstruction(_)))
    }
}
