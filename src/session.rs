//! Search session controller.
//!
//! A [`Session`] holds at most one current [`PriceResult`]. Searches and
//! history loads replace it wholesale; the presenter renders whatever is
//! current. Searches are single-flight: a second search issued while one is
//! running fails with [`DashboardError::Busy`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::api::{remote_error, PriceApi};
use crate::config;
use crate::error::{DashboardError, Result};
use crate::histogram::build_histogram;
use crate::history::HistoryManager;
use crate::models::{PriceResult, SaveRequest, SearchResponse, Stats};

// ---------------------------------------------------------------------------
// BusyGuard
// ---------------------------------------------------------------------------

/// Holds the session's busy flag; releases it on drop, whatever the exit path.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DashboardError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The current result plus a counter bumped every time it is replaced.
#[derive(Default)]
struct Current {
    result: Option<PriceResult>,
    generation: u64,
}

/// One dashboard session over a [`PriceApi`].
pub struct Session<A: PriceApi> {
    api: Arc<A>,
    history: HistoryManager<A>,
    current: Mutex<Current>,
    last_error: Mutex<Option<String>>,
    busy: AtomicBool,
}

impl<A: PriceApi> Session<A> {
    pub fn new(api: A) -> Self {
        let api = Arc::new(api);
        Self {
            history: HistoryManager::new(Arc::clone(&api)),
            api,
            current: Mutex::new(Current::default()),
            last_error: Mutex::new(None),
            busy: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn history(&self) -> &HistoryManager<A> {
        &self.history
    }

    // -- State accessors ---------------------------------------------------

    /// A copy of the current result, if any.
    pub fn current(&self) -> Option<PriceResult> {
        lock(&self.current).result.clone()
    }

    /// Whether a search is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// The message of the most recent failed action, cleared when a new
    /// search starts or an action succeeds.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }

    /// Drop the current result and any error message.
    pub fn clear(&self) {
        self.replace_current(None);
        *lock(&self.last_error) = None;
    }

    // -- Actions -----------------------------------------------------------

    /// Search for `keyword`, adopt the result and refresh the history list.
    ///
    /// The history refresh runs after the result is adopted and never fails
    /// the search. On failure the previous result stays current.
    pub fn search(&self, keyword: &str) -> Result<PriceResult> {
        let result = self.search_without_refresh(keyword)?;
        self.history.refresh_list();
        Ok(result)
    }

    /// [`search`](Self::search) minus the history refresh, for callers that
    /// schedule the refresh themselves.
    pub(crate) fn search_without_refresh(&self, keyword: &str) -> Result<PriceResult> {
        let outcome = self.run_search(keyword);
        match &outcome {
            Ok(result) => {
                tracing::info!(
                    keyword = %result.keyword,
                    count = result.stats.count,
                    "search completed"
                );
            }
            // The in-flight search owns the error slot.
            Err(DashboardError::Busy) => {}
            Err(e) => {
                tracing::debug!(error = %e, "search failed");
                self.set_error(Some(e.user_message()));
            }
        }
        outcome
    }

    fn run_search(&self, keyword: &str) -> Result<PriceResult> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(DashboardError::Validation("keyword required".into()));
        }

        let _busy = BusyGuard::acquire(&self.busy)?;
        self.set_error(None);
        tracing::debug!(keyword, "searching");

        let resp = self.api.search(keyword)?;
        if !resp.success {
            return Err(remote_error(resp.error, config::SEARCH_FAILED));
        }

        let result = result_from_search(keyword, resp);
        self.adopt(result.clone());
        Ok(result)
    }

    /// Save the current result through the backend and return the filename.
    ///
    /// The filename is recorded on the current result and the history list
    /// is refreshed.
    pub fn save(&self) -> Result<String> {
        let outcome = self.run_save();
        match &outcome {
            Ok(filename) => {
                tracing::info!(%filename, "result saved");
                self.set_error(None);
                self.history.refresh_list();
            }
            Err(e) => self.set_error(Some(e.user_message())),
        }
        outcome
    }

    fn run_save(&self) -> Result<String> {
        let (generation, current) = {
            let slot = lock(&self.current);
            let current = slot
                .result
                .clone()
                .ok_or_else(|| DashboardError::Validation("no result to save".into()))?;
            (slot.generation, current)
        };

        let request = SaveRequest {
            keyword: current.keyword,
            prices: current.prices,
            stats: current.stats,
        };
        let resp = self.api.save(&request)?;
        let filename = match resp.filename {
            Some(filename) if resp.success => filename,
            _ => return Err(remote_error(resp.error, config::SAVE_FAILED)),
        };

        // Only tag the result we saved; a search or load may have replaced it.
        let mut slot = lock(&self.current);
        if slot.generation == generation {
            if let Some(result) = slot.result.as_mut() {
                result.saved_filename = Some(filename.clone());
            }
        }
        Ok(filename)
    }

    /// Load a saved search and make it the current result, exactly as if it
    /// had come from a live search.
    pub fn load_entry(&self, filename: &str) -> Result<PriceResult> {
        let outcome = if filename.trim().is_empty() {
            Err(DashboardError::Validation("filename required".into()))
        } else {
            self.history.load_entry(filename)
        };

        match outcome {
            Ok(result) => {
                tracing::info!(%filename, keyword = %result.keyword, "loaded saved result");
                self.set_error(None);
                self.adopt(result.clone());
                Ok(result)
            }
            Err(e) => {
                self.set_error(Some(e.user_message()));
                Err(e)
            }
        }
    }

    fn adopt(&self, result: PriceResult) {
        self.replace_current(Some(result));
    }

    fn replace_current(&self, result: Option<PriceResult>) {
        let mut slot = lock(&self.current);
        slot.result = result;
        slot.generation = slot.generation.wrapping_add(1);
    }

    fn set_error(&self, message: Option<String>) {
        *lock(&self.last_error) = message;
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build the canonical result from a successful search payload.
///
/// Stats and histogram are derived locally when the backend omits them.
fn result_from_search(keyword: &str, resp: SearchResponse) -> PriceResult {
    let prices = resp.prices.unwrap_or_default();
    let stats = resp.stats.unwrap_or_else(|| Stats::from_prices(&prices));
    let histogram = resp
        .histogram
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| build_histogram(&prices));

    PriceResult {
        keyword: resp
            .keyword
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| keyword.to_string()),
        stats,
        prices,
        histogram,
        saved_filename: resp.saved_filename,
    }
}
