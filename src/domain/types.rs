//! Shared persisted types.
//!
//! These rows round-trip through the JSON store, so they stay serializable
//! and tolerate absent optional fields written by earlier runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Swedish environmental milestone target ("etappmål").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recorded progress percent, kept in `[0, 100]`.
    pub progress: u32,
    /// Declarative goal payload, consumed verbatim at use time; see
    /// [`crate::domain::goal`] for the tolerated shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<serde_json::Value>,
}

/// A statistic source, optionally feeding one milestone's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRow {
    pub id: u32,
    pub url: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u32>,
}

/// Per-source fetch cache. One row per source, replaced on every sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRow {
    pub source_id: u32,
    pub last_fetched: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Raw body for JSON responses; `None` for PX responses, whose text
    /// lives in `transformed` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformed: Option<Transformed>,
    /// `"ok"`, `"not-modified"`, or `"error:<status>"`.
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl CacheRow {
    /// Row for a source that has never produced a payload.
    pub fn stub(source_id: u32, now: DateTime<Utc>) -> Self {
        Self {
            source_id,
            last_fetched: now,
            etag: None,
            last_modified: None,
            raw: None,
            transformed: None,
            status: String::new(),
            updated_at: now,
        }
    }
}

/// Decoded payload summary stored alongside the cache row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transformed {
    pub fetched_at: DateTime<Utc>,
    /// JSON responses: array length. PX responses: numeric token count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_summary: Option<u64>,
    /// Original PX text, kept so charts can be rebuilt without a refetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub px_text: Option<String>,
    /// Numeric series decoded from PX; empty for JSON payloads.
    #[serde(default)]
    pub series: Vec<f64>,
    /// Year labels decoded from PX; length may differ from `series`.
    #[serde(default)]
    pub categories: Vec<String>,
}
