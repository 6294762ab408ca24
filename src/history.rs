//! Saved-search history: best-effort listing and full reload by filename.

use std::sync::{Arc, Mutex, PoisonError};

use crate::api::{remote_error, PriceApi};
use crate::config;
use crate::error::Result;
use crate::histogram::build_histogram;
use crate::models::{HistoryEntry, PriceResult, SavedRecord};

#[derive(Debug, Default)]
struct HistoryState {
    entries: Vec<HistoryEntry>,
    available: bool,
}

/// Keeps the last fetched history list and rebuilds full results from
/// saved records.
pub struct HistoryManager<A: PriceApi> {
    api: Arc<A>,
    state: Mutex<HistoryState>,
}

impl<A: PriceApi> HistoryManager<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: Mutex::new(HistoryState::default()),
        }
    }

    /// Fetch the saved-search list.
    ///
    /// Never fails: on any error the failure is logged, the cached list is
    /// cleared and an empty list is returned, with [`is_available`](Self::is_available)
    /// reporting `false` until the next successful refresh.
    pub fn refresh_list(&self) -> Vec<HistoryEntry> {
        let fetched = self.api.history().and_then(|resp| {
            if resp.success {
                Ok(resp.history)
            } else {
                Err(remote_error(resp.error, config::HISTORY_FAILED))
            }
        });

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match fetched {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "history refreshed");
                state.entries = entries;
                state.available = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "history refresh failed");
                state.entries.clear();
                state.available = false;
            }
        }
        state.entries.clone()
    }

    /// The list from the last refresh (empty before the first one).
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clone()
    }

    /// Whether the last refresh succeeded.
    pub fn is_available(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .available
    }

    /// Load a saved search and rebuild it as a full [`PriceResult`].
    ///
    /// The histogram is always recomputed from the stored prices; saved
    /// records never carry one.
    pub fn load_entry(&self, filename: &str) -> Result<PriceResult> {
        let resp = self.api.load(filename)?;
        match resp.data {
            Some(record) if resp.success => Ok(PriceResult::from(record)),
            _ => Err(remote_error(resp.error, config::LOAD_FAILED)),
        }
    }
}

/// A reloaded result is shown as unsaved, like a fresh search without auto-save.
impl From<SavedRecord> for PriceResult {
    fn from(record: SavedRecord) -> Self {
        let histogram = build_histogram(&record.prices);
        PriceResult {
            keyword: record.keyword,
            stats: record.statistics,
            prices: record.prices,
            histogram,
            saved_filename: None,
        }
    }
}
