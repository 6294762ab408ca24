//! Display models derived from results and history entries.
//!
//! Everything here is a pure transform; the renderer owns timing and output.

use std::time::Duration;

use serde::Serialize;

use crate::config::{SAVE_BUTTON_REVERT, TOP_PRICES};
use crate::format::format_grouped;
use crate::models::{Histogram, HistoryEntry, PriceResult, Stats};

/// State of the save action for the current result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "filename", rename_all = "snake_case")]
pub enum SaveButtonState {
    Unsaved,
    Saved(String),
}

impl SaveButtonState {
    /// The state to show `elapsed` after the result was displayed.
    ///
    /// `Saved` is a transient cue and reverts to `Unsaved` after
    /// [`SAVE_BUTTON_REVERT`].
    pub fn at(&self, elapsed: Duration) -> SaveButtonState {
        match self {
            SaveButtonState::Saved(_) if elapsed < SAVE_BUTTON_REVERT => self.clone(),
            _ => SaveButtonState::Unsaved,
        }
    }
}

/// Display-ready view of one [`PriceResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub keyword: String,
    pub count_text: String,
    pub average_text: String,
    pub max_text: String,
    pub min_text: String,
    pub range_text: String,
    pub histogram: Histogram,
    /// First prices of the result, in their original order.
    pub top_prices: Vec<String>,
    pub save_button: SaveButtonState,
}

/// Display-ready view of one [`HistoryEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItemModel {
    pub filename: String,
    pub keyword: String,
    pub date: String,
    pub count_text: String,
    pub average_text: String,
    pub max_text: String,
    pub min_text: String,
}

pub fn present(result: &PriceResult) -> DisplayModel {
    let stats = StatsText::from(&result.stats);
    DisplayModel {
        keyword: result.keyword.clone(),
        count_text: stats.count,
        average_text: stats.average,
        max_text: stats.max,
        min_text: stats.min,
        range_text: format_grouped(result.stats.range()),
        histogram: result.histogram.clone(),
        top_prices: result
            .prices
            .iter()
            .take(TOP_PRICES)
            .map(|&p| format_grouped(p))
            .collect(),
        save_button: match &result.saved_filename {
            Some(filename) => SaveButtonState::Saved(filename.clone()),
            None => SaveButtonState::Unsaved,
        },
    }
}

pub fn present_entry(entry: &HistoryEntry) -> HistoryItemModel {
    let stats = StatsText::from(&entry.stats);
    HistoryItemModel {
        filename: entry.filename.clone(),
        keyword: entry.keyword.clone(),
        date: entry.date.clone(),
        count_text: stats.count,
        average_text: stats.average,
        max_text: stats.max,
        min_text: stats.min,
    }
}

struct StatsText {
    count: String,
    average: String,
    max: String,
    min: String,
}

impl From<&Stats> for StatsText {
    fn from(stats: &Stats) -> Self {
        Self {
            count: format_grouped(stats.count as f64),
            average: format_grouped(stats.average.round()),
            max: format_grouped(stats.max),
            min: format_grouped(stats.min),
        }
    }
}
