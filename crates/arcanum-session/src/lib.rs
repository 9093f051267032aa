//! Per-reading session cache for Arcanum.
//!
//! A reading is fingerprinted by its normalized question plus its card
//! signature; this crate persists reward-unlock state and the last
//! successful deep analysis under that fingerprint, expiring entries after
//! seven days. Storage is a single-slot string store — a browser
//! local-storage key, a file on disk, or memory — and every failure mode
//! degrades to "no cached state" rather than an error the reading flow has
//! to care about.

/// The TTL-pruned session cache.
pub mod cache;
/// Error types for persistence.
pub mod error;
/// The persisted session record.
pub mod state;
/// Storage backends.
pub mod store;

/// Re-export the cache.
pub use cache::{SESSION_TTL_DAYS, SessionCache};
/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export the session record.
pub use state::SessionState;
/// Re-export storage backends.
pub use store::{FileStore, MemoryStore, SessionStore};
