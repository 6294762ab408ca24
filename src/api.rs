//! Remote collaborators of the dashboard: search, save, history listing and
//! load-by-filename.
//!
//! [`PriceApi`] is the seam the session talks to; [`HttpPriceApi`] is the
//! blocking HTTP implementation against the dashboard backend.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::{
    HistoryResponse, LoadResponse, SaveRequest, SaveResponse, SearchRequest, SearchResponse,
};

// ---------------------------------------------------------------------------
// PriceApi
// ---------------------------------------------------------------------------

/// The four backend endpoints the dashboard consumes.
///
/// Implementations return `Err(DashboardError::Remote)` for a non-success
/// HTTP status and `Err(DashboardError::Network)` for transport failures.
/// A success status with `success: false` in the body is returned as `Ok`;
/// interpreting the flag is left to the caller.
pub trait PriceApi: Send + Sync {
    fn search(&self, keyword: &str) -> Result<SearchResponse>;

    fn save(&self, request: &SaveRequest) -> Result<SaveResponse>;

    fn history(&self) -> Result<HistoryResponse>;

    fn load(&self, filename: &str) -> Result<LoadResponse>;
}

// ---------------------------------------------------------------------------
// HttpPriceApi
// ---------------------------------------------------------------------------

/// JSON-over-HTTP client for the dashboard backend.
pub struct HttpPriceApi {
    base_url: String,
    client: Client,
}

impl HttpPriceApi {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(DashboardError::InvalidArgument(
                "base URL must not be empty".into(),
            ));
        }
        reqwest::Url::parse(base_url).map_err(|e| {
            DashboardError::InvalidArgument(format!("invalid base URL '{base_url}': {e}"))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PriceApi for HttpPriceApi {
    fn search(&self, keyword: &str) -> Result<SearchResponse> {
        let body = SearchRequest {
            keyword: keyword.to_string(),
        };
        let resp = self
            .client
            .post(self.url(config::SEARCH_PATH))
            .json(&body)
            .send()?;
        decode(resp, config::SEARCH_FAILED)
    }

    fn save(&self, request: &SaveRequest) -> Result<SaveResponse> {
        let resp = self
            .client
            .post(self.url(config::SAVE_PATH))
            .json(request)
            .send()?;
        decode(resp, config::SAVE_FAILED)
    }

    fn history(&self) -> Result<HistoryResponse> {
        let resp = self.client.get(self.url(config::HISTORY_PATH)).send()?;
        decode(resp, config::HISTORY_FAILED)
    }

    fn load(&self, filename: &str) -> Result<LoadResponse> {
        let url = format!(
            "{}/{}",
            self.url(config::LOAD_PATH),
            urlencoding::encode(filename)
        );
        let resp = self.client.get(url).send()?;
        decode(resp, config::LOAD_FAILED)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode a backend response body.
///
/// On a non-success status the body's `error` field becomes the
/// [`DashboardError::Remote`] message, or `fallback` when there is none (or
/// the body is not JSON at all, e.g. a proxy error page).
fn decode<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T> {
    let status = resp.status();
    let text = resp.text()?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| server_error(&v))
            .unwrap_or_else(|| fallback.to_string());
        tracing::debug!(%status, %message, "backend returned an error status");
        return Err(DashboardError::Remote(message));
    }

    Ok(serde_json::from_str(&text)?)
}

/// The `error` message of a response body, if it carries a non-empty one.
pub(crate) fn server_error(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Pick the server-supplied message when present, else `fallback`.
pub(crate) fn remote_error(error: Option<String>, fallback: &str) -> DashboardError {
    let message = error
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    DashboardError::Remote(message)
}
