//! Shared test fixtures for the dashboard integration tests.
//!
//! Provides `FakeApi`, an in-memory `PriceApi` with scripted responses that
//! records every call, plus JSON builders for typical backend payloads.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use price_dashboard::models::{
    HistoryResponse, LoadResponse, SaveRequest, SaveResponse, SearchResponse,
};
use price_dashboard::{DashboardError, PriceApi, Result};

/// One recorded call against the fake backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String),
    Save(SaveRequest),
    History,
    Load(String),
}

type Scripted<T> = Mutex<VecDeque<Result<T>>>;

/// Scripted `PriceApi`. Each endpoint pops its next queued response; an
/// empty queue answers with a remote error naming the endpoint.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    search: Scripted<SearchResponse>,
    save: Scripted<SaveResponse>,
    history: Scripted<HistoryResponse>,
    load: Scripted<LoadResponse>,
    search_delay: Option<Duration>,
    save_delay: Option<Duration>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every search call.
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = Some(delay);
        self
    }

    /// Sleep this long inside every save call.
    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = Some(delay);
        self
    }

    pub fn push_search(&self, resp: Result<SearchResponse>) -> &Self {
        self.search.lock().unwrap().push_back(resp);
        self
    }

    pub fn push_search_json(&self, body: serde_json::Value) -> &Self {
        self.push_search(Ok(serde_json::from_value(body).unwrap()))
    }

    pub fn push_save_json(&self, body: serde_json::Value) -> &Self {
        self.save
            .lock()
            .unwrap()
            .push_back(Ok(serde_json::from_value(body).unwrap()));
        self
    }

    pub fn push_history(&self, resp: Result<HistoryResponse>) -> &Self {
        self.history.lock().unwrap().push_back(resp);
        self
    }

    pub fn push_history_json(&self, body: serde_json::Value) -> &Self {
        self.push_history(Ok(serde_json::from_value(body).unwrap()))
    }

    pub fn push_load(&self, resp: Result<LoadResponse>) -> &Self {
        self.load.lock().unwrap().push_back(resp);
        self
    }

    pub fn push_load_json(&self, body: serde_json::Value) -> &Self {
        self.push_load(Ok(serde_json::from_value(body).unwrap()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search(_)))
            .count()
    }

    pub fn history_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::History))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn pop<T>(queue: &Scripted<T>, endpoint: &str) -> Result<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(DashboardError::Remote(format!("no scripted {endpoint} response"))))
}

impl PriceApi for FakeApi {
    fn search(&self, keyword: &str) -> Result<SearchResponse> {
        self.record(Call::Search(keyword.to_string()));
        if let Some(delay) = self.search_delay {
            std::thread::sleep(delay);
        }
        pop(&self.search, "search")
    }

    fn save(&self, request: &SaveRequest) -> Result<SaveResponse> {
        self.record(Call::Save(request.clone()));
        if let Some(delay) = self.save_delay {
            std::thread::sleep(delay);
        }
        pop(&self.save, "save")
    }

    fn history(&self) -> Result<HistoryResponse> {
        self.record(Call::History);
        pop(&self.history, "history")
    }

    fn load(&self, filename: &str) -> Result<LoadResponse> {
        self.record(Call::Load(filename.to_string()));
        pop(&self.load, "load")
    }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

/// A successful search payload for `[10, 20, 20, 30, 40]`.
pub fn search_ok(keyword: &str) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "keyword": keyword,
        "stats": {"count": 5, "average": 24.0, "max": 40, "min": 10, "range": 30},
        "prices": [10, 20, 20, 30, 40],
        "histogram": {
            "labels": ["10", "11", "13", "14", "16", "18", "19", "20", "22", "24",
                       "25", "26", "28", "30", "31", "32", "34", "36", "37", "38"],
            "values": [1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1]
        },
        "saved_filename": format!("result_{keyword}_20240101_120000.pkl")
    })
}

pub fn history_ok() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "history": [
            {
                "filename": "result_keyboard_20240102_090000.pkl",
                "keyword": "keyboard",
                "date": "2024-01-02 09:00",
                "stats": {"count": 3, "average": 100.0, "max": 150, "min": 50}
            },
            {
                "filename": "result_monitor_20240101_080000.pkl",
                "keyword": "monitor",
                "date": "2024-01-01 08:00",
                "stats": {}
            }
        ]
    })
}

pub fn load_ok() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "keyword": "keyboard",
            "prices": [50, 100, 150],
            "statistics": {"count": 3, "average": 100.0, "max": 150, "min": 50}
        }
    })
}
