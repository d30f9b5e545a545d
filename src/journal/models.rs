//! Mood journal data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scale::Mood;

/// A stored mood record as read back from disk.
///
/// This is the untrusted boundary: legacy or partial records may be missing
/// any payload field and must still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoodRecord {
    /// Unique identifier
    pub id: Uuid,
    /// When the mood was recorded
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Emoji symbol from the mood palette
    #[serde(default)]
    pub symbol: Option<String>,
    /// Optional free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// A validated, scored journal entry.
///
/// Constructed only by normalization; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Identifier carried over from the source record
    pub id: Uuid,
    /// When the mood was recorded
    pub timestamp: DateTime<Utc>,
    /// The recorded mood
    pub mood: Mood,
    /// Score 1-6 derived from the mood
    pub score: u8,
    /// Free-text comment, empty when none was recorded
    pub comment: String,
}

/// Request to record a new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntryRequest {
    /// Emoji symbol from the mood palette
    pub symbol: String,
    /// Optional free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}
