//! Error types for narrative generation.

use thiserror::Error;

/// Result type for narrative operations.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Errors a narrative provider can surface. Callers treat any of these as
/// "no narrative available" and fall back to cached or template text.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// The provider cannot be reached (offline, no endpoint configured).
    #[error("narrative provider unavailable")]
    Unavailable,

    /// The provider was reached but refused or failed the request
    /// (timeout, auth, quota).
    #[error("narrative provider failed: {0}")]
    Provider(String),
}
