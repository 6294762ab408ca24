use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "PRICE_DASHBOARD_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of histogram bins, fixed for every result.
pub const BIN_COUNT: usize = 20;

/// How many prices the display model lists.
pub const TOP_PRICES: usize = 20;

pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(5);
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);
pub const SAVE_BUTTON_REVERT: Duration = Duration::from_secs(3);

// Fallback messages when the server does not supply one.
pub const SEARCH_FAILED: &str = "search failed";
pub const SAVE_FAILED: &str = "save failed";
pub const LOAD_FAILED: &str = "could not load result";
pub const HISTORY_FAILED: &str = "history unavailable";

pub const SEARCH_PATH: &str = "/api/search";
pub const SAVE_PATH: &str = "/api/save";
pub const HISTORY_PATH: &str = "/api/history";
pub const LOAD_PATH: &str = "/api/load";

pub fn default_base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
