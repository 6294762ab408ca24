//! Async wrapper around [`Session`] for use in Tokio runtimes.
//!
//! Session actions block on HTTP, so they run on the blocking thread pool
//! via [`tokio::task::spawn_blocking`]. After a successful search the
//! history refresh is issued as a detached task: it is ordered only after
//! the search it follows and its failures are logged, never returned.
//!
//! # Example
//!
//! ```no_run
//! use price_dashboard::AsyncDashboard;
//!
//! #[tokio::main]
//! async fn main() {
//!     let dashboard = AsyncDashboard::builder().build().await.unwrap();
//!     let result = dashboard.search("keyboard").await.unwrap();
//!     println!("{} prices", result.stats.count);
//! }
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{HttpPriceApi, PriceApi};
use crate::error::{DashboardError, Result};
use crate::models::{HistoryEntry, PriceResult};
use crate::session::Session;
use crate::DashboardBuilder;

// ---------------------------------------------------------------------------
// AsyncDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncDashboard`] over the HTTP backend.
#[derive(Default)]
pub struct AsyncDashboardBuilder {
    inner: DashboardBuilder,
}

impl AsyncDashboardBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the dashboard. The blocking HTTP client is created on the
    /// blocking pool.
    pub async fn build(self) -> Result<AsyncDashboard<HttpPriceApi>> {
        let session = tokio::task::spawn_blocking(move || self.inner.build())
            .await
            .map_err(join_error)??;
        Ok(AsyncDashboard::new(session))
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboard
// ---------------------------------------------------------------------------

/// Async front for a shared [`Session`].
pub struct AsyncDashboard<A: PriceApi + 'static> {
    session: Arc<Session<A>>,
    refresh: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl AsyncDashboard<HttpPriceApi> {
    pub fn builder() -> AsyncDashboardBuilder {
        AsyncDashboardBuilder::default()
    }
}

impl<A: PriceApi + 'static> AsyncDashboard<A> {
    pub fn new(session: Session<A>) -> Self {
        Self {
            session: Arc::new(session),
            refresh: std::sync::Mutex::new(None),
        }
    }

    /// The shared session, for state accessors like
    /// [`current`](Session::current) and [`is_busy`](Session::is_busy).
    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    /// Search, adopt the result, then schedule a history refresh.
    ///
    /// Concurrent calls are rejected with [`DashboardError::Busy`].
    pub async fn search(&self, keyword: &str) -> Result<PriceResult> {
        let keyword = keyword.to_string();
        let result = self
            .run(move |s| s.search_without_refresh(&keyword))
            .await?;

        let session = Arc::clone(&self.session);
        let handle = tokio::task::spawn_blocking(move || {
            session.history().refresh_list();
        });
        *self
            .refresh
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(handle);

        Ok(result)
    }

    /// Wait for the most recently scheduled history refresh, if any.
    pub async fn settle(&self) {
        let handle = self
            .refresh
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "history refresh task failed");
            }
        }
    }

    pub async fn save(&self) -> Result<String> {
        self.run(|s| s.save()).await
    }

    pub async fn refresh_history(&self) -> Result<Vec<HistoryEntry>> {
        self.run(|s| Ok(s.history().refresh_list())).await
    }

    pub async fn load_entry(&self, filename: &str) -> Result<PriceResult> {
        let filename = filename.to_string();
        self.run(move |s| s.load_entry(&filename)).await
    }

    async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Session<A>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let session = Arc::clone(&self.session);
        tokio::task::spawn_blocking(move || f(&session))
            .await
            .map_err(join_error)?
    }
}

fn join_error(e: tokio::task::JoinError) -> DashboardError {
    DashboardError::Task(e.to_string())
}
