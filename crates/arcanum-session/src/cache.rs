//! The reading session cache.
//!
//! Sessions are keyed by `normalized question + "::" + reading signature`
//! and expire after seven days. The whole collection is re-read, pruned,
//! mutated, and rewritten on every update; there is no finer-grained
//! atomicity, which is sound for single-user local state.

use chrono::{TimeDelta, Utc};

use crate::error::SessionResult;
use crate::state::SessionState;
use crate::store::SessionStore;

/// How long a session survives without being touched.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Signature-keyed, TTL-pruned session persistence over a [`SessionStore`].
#[derive(Debug)]
pub struct SessionCache<S> {
    store: S,
}

impl<S: SessionStore> SessionCache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The session time-to-live.
    pub fn ttl() -> TimeDelta {
        TimeDelta::days(SESSION_TTL_DAYS)
    }

    /// Access the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Canonical form of a question for keying: trimmed, lowercased, inner
    /// whitespace collapsed.
    pub fn normalize_question(question: &str) -> String {
        question
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// Cache key for a question and a reading signature.
    pub fn cache_key(question: &str, signature: &str) -> String {
        format!("{}::{signature}", Self::normalize_question(question))
    }

    /// Look up a session by key. Expired entries — including the one asked
    /// for — are pruned from the store as a side effect of every read.
    pub fn load(&mut self, key: &str) -> Option<SessionState> {
        self.prune().into_iter().find(|s| s.key == key)
    }

    /// All live sessions, pruning expired ones on the way.
    pub fn sessions(&mut self) -> Vec<SessionState> {
        self.prune()
    }

    /// Record that the reward gate was unlocked for a reading.
    pub fn mark_reward_unlocked(
        &mut self,
        question: &str,
        signature: &str,
    ) -> SessionResult<SessionState> {
        self.upsert(question, signature, |state| {
            state.has_unlocked_reward = true;
        })
    }

    /// Persist a successfully generated deep analysis for a reading.
    pub fn store_deep_analysis(
        &mut self,
        question: &str,
        signature: &str,
        analysis: &str,
    ) -> SessionResult<SessionState> {
        self.upsert(question, signature, |state| {
            state.deep_analysis = Some(analysis.to_string());
        })
    }

    /// Sweep every expired session out of the store. Returns how many were
    /// removed.
    pub fn purge_stale(&mut self) -> SessionResult<usize> {
        let all = self.read_all();
        let now = Utc::now();
        let live: Vec<SessionState> = all
            .iter()
            .filter(|s| !s.is_expired(now, Self::ttl()))
            .cloned()
            .collect();
        let removed = all.len() - live.len();
        if removed > 0 {
            self.write_all(&live)?;
        }
        Ok(removed)
    }

    /// Create-or-merge a session, refreshing its timestamp.
    fn upsert(
        &mut self,
        question: &str,
        signature: &str,
        apply: impl FnOnce(&mut SessionState),
    ) -> SessionResult<SessionState> {
        let key = Self::cache_key(question, signature);
        let mut sessions = self.prune();
        let now = Utc::now();
        let state = match sessions.iter_mut().find(|s| s.key == key) {
            Some(existing) => {
                apply(existing);
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let mut created = SessionState::new(key, question, signature, now);
                apply(&mut created);
                sessions.push(created.clone());
                created
            }
        };
        self.write_all(&sessions)?;
        Ok(state)
    }

    /// Read the collection and drop expired entries, rewriting the store
    /// when anything was dropped.
    fn prune(&mut self) -> Vec<SessionState> {
        let all = self.read_all();
        let now = Utc::now();
        let before = all.len();
        let live: Vec<SessionState> = all
            .into_iter()
            .filter(|s| !s.is_expired(now, Self::ttl()))
            .collect();
        if live.len() != before
            && let Err(e) = self.write_all(&live)
        {
            log::warn!("failed to persist pruned sessions: {e}");
        }
        live
    }

    /// Decode the stored collection. Absent or corrupted payloads count as
    /// empty — persistence problems must never break a reading.
    fn read_all(&self) -> Vec<SessionState> {
        let Some(payload) = self.store.read() else {
            return Vec::new();
        };
        match serde_json::from_str(&payload) {
            Ok(sessions) => sessions,
            Err(e) => {
                log::warn!("ignoring corrupted session payload: {e}");
                Vec::new()
            }
        }
    }

    fn write_all(&mut self, sessions: &[SessionState]) -> SessionResult<()> {
        let payload = serde_json::to_string(sessions)?;
        self.store.write(&payload)
    }
}
