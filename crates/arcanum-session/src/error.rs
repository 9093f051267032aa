//! Error types for session persistence.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while persisting session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store rejected a write or clear.
    #[error("session storage failed: {0}")]
    Storage(String),

    /// The session collection could not be encoded as JSON.
    #[error("session payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}
