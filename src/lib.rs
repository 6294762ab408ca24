//! Price dashboard client for Rust.
//!
//! Talks to the price analysis backend: runs keyword searches, turns the
//! results into display models with a 20-bin price histogram, and lists and
//! reloads saved searches.
//!
//! # Quick start
//!
//! ```no_run
//! use price_dashboard::{presenter, Session};
//!
//! let session = Session::builder()
//!     .base_url("http://localhost:8080")
//!     .build()
//!     .unwrap();
//!
//! // Search and render
//! let result = session.search("wireless mouse").unwrap();
//! let model = presenter::present(&result);
//! println!("{} prices, average {}", model.count_text, model.average_text);
//!
//! // Reload an earlier search
//! let history = session.history().refresh_list();
//! if let Some(entry) = history.first() {
//!     session.load_entry(&entry.filename).unwrap();
//! }
//! ```

pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod format;
pub mod histogram;
pub mod history;
pub mod models;
pub mod presenter;
pub mod render;
pub mod sample;
pub mod session;

pub use api::{HttpPriceApi, PriceApi};
#[cfg(feature = "async")]
pub use async_client::AsyncDashboard;
pub use error::{DashboardError, Result};
pub use histogram::build_histogram;
pub use history::HistoryManager;
pub use models::{Histogram, HistoryEntry, PriceResult, Stats};
pub use presenter::{present, DisplayModel, SaveButtonState};
pub use session::Session;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`Session`] over the HTTP backend.
///
/// Use [`Session::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build).
pub struct DashboardBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            base_url: config::default_base_url(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl DashboardBuilder {
    /// Set the backend base URL.
    ///
    /// Defaults to `$PRICE_DASHBOARD_URL`, or `http://localhost:8080` when
    /// the variable is unset.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the session. No request is sent until the first action.
    pub fn build(self) -> Result<Session<HttpPriceApi>> {
        let api = HttpPriceApi::new(&self.base_url, self.timeout)?;
        Ok(Session::new(api))
    }
}

impl Session<HttpPriceApi> {
    /// Create a new builder for an HTTP-backed session.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Session<HttpPriceApi> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session(base_url={}, busy={}, current={})",
            self.api().base_url(),
            self.is_busy(),
            self.current()
                .map(|r| r.keyword)
                .unwrap_or_else(|| "-".to_string())
        )
    }
}
