//! Request and response bodies of the dashboard backend's JSON API.
//!
//! Response fields the backend may omit are optional or defaulted so that a
//! bare `{"success": false, "error": "..."}` body always decodes.

use serde::{Deserialize, Serialize};

use super::history::{HistoryEntry, SavedRecord};
use super::price::{Histogram, Stats};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub keyword: String,
    pub prices: Vec<f64>,
    pub stats: Stats,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// `POST /api/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
    pub keyword: Option<String>,
    pub stats: Option<Stats>,
    pub prices: Option<Vec<f64>>,
    pub histogram: Option<Histogram>,
    pub saved_filename: Option<String>,
}

/// `POST /api/save`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    pub filename: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// `GET /api/history`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub error: Option<String>,
}

/// `GET /api/load/{filename}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<SavedRecord>,
    pub error: Option<String>,
}
