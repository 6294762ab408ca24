use serde::{Deserialize, Deserializer, Serialize};

use super::price::{null_as_default, Stats};

// ---------------------------------------------------------------------------
// HistoryEntry — Summary of one saved search
// ---------------------------------------------------------------------------

/// Lightweight listing of a saved result. Carries no samples or histogram;
/// the full result is materialized through `filename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub filename: String,
    #[serde(default = "unknown_keyword", deserialize_with = "null_as_unknown")]
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
}

// ---------------------------------------------------------------------------
// SavedRecord — Stored shape returned by the load endpoint
// ---------------------------------------------------------------------------

/// A saved search as persisted by the backend. Stats are stored under
/// `statistics`; histograms are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    #[serde(default = "unknown_keyword", deserialize_with = "null_as_unknown")]
    pub keyword: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: Stats,
}

fn unknown_keyword() -> String {
    "Unknown".to_string()
}

fn null_as_unknown<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_keyword))
}
