//! The persisted per-reading session record.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// One persisted session: unlock state and the last successful narrative
/// for a specific reading. Serializes to the storage collaborator's JSON
/// shape (camelCase fields, ISO-8601 timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Cache key: normalized question joined to the reading signature.
    pub key: String,
    /// The question as originally asked.
    pub question: String,
    /// Reading signature of the drawn spread.
    pub signature: String,
    /// Whether the reward gate has been unlocked for this reading.
    pub has_unlocked_reward: bool,
    /// The last successfully generated deep analysis, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_analysis: Option<String>,
    /// When this record was last written.
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    /// Create a fresh record with nothing unlocked and no analysis.
    pub fn new(key: String, question: &str, signature: &str, now: DateTime<Utc>) -> Self {
        Self {
            key,
            question: question.to_string(),
            signature: signature.to_string(),
            has_unlocked_reward: false,
            deep_analysis: None,
            updated_at: now,
        }
    }

    /// Whether this record's age exceeds the time-to-live.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.updated_at) > ttl
    }
}
