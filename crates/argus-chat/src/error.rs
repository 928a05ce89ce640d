//! Error types for the conversational interface.

use argus_core::error::ArgusError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("a turn is already being processed")]
    Busy,
    #[error("turn not found: {0}")]
    TurnNotFound(uuid::Uuid),
    #[error("search error: {0}")]
    SearchError(String),
    #[error("store error: {0}")]
    StoreError(String),
}

impl From<ArgusError> for ChatError {
    fn from(err: ArgusError) -> Self {
        ChatError::StoreError(err.to_string())
    }
}
