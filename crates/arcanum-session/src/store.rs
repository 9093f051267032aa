//! Storage backends for the session collection.
//!
//! The whole collection lives as one JSON document under a single
//! well-known slot, mirroring a browser local-storage key. A store only
//! moves opaque strings; the cache layer owns the JSON shape.

use std::path::{Path, PathBuf};

use crate::error::{SessionError, SessionResult};

/// A single-slot string store.
///
/// Reads are infallible by contract: an unavailable or unreadable backend
/// reports `None` and the cache treats that as an empty collection, so the
/// reading experience keeps working without persistence.
pub trait SessionStore {
    /// The current payload, or `None` if absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Replace the payload.
    fn write(&mut self, payload: &str) -> SessionResult<()>;

    /// Remove the payload entirely.
    fn clear(&mut self) -> SessionResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.payload.clone()
    }

    fn write(&mut self, payload: &str) -> SessionResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.payload = None;
        Ok(())
    }
}

/// One JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given path. The file need not exist
    /// yet; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, payload: &str) -> SessionResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SessionError::Storage(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, payload)
            .map_err(|e| SessionError::Storage(format!("cannot write {}: {e}", self.path.display())))
    }

    fn clear(&mut self) -> SessionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "cannot remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
