//! Plain-text rendering of display models and notices for terminals.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::config::{ERROR_NOTICE_TTL, SUCCESS_NOTICE_TTL};
use crate::presenter::{DisplayModel, HistoryItemModel, SaveButtonState};

const BAR_WIDTH: usize = 40;
const RULE_WIDTH: usize = 60;

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient success or error message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// How long the notice stays visible.
    pub fn ttl(&self) -> Duration {
        match self.kind {
            NoticeKind::Success => SUCCESS_NOTICE_TTL,
            NoticeKind::Error => ERROR_NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl()
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Writes display models to any [`Write`] sink.
pub struct Renderer<W: Write> {
    out: W,
}

impl Renderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        writeln!(self.out, "[{tag}] {}", notice.message)
    }

    pub fn result(&mut self, model: &DisplayModel) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Keyword: {}", model.keyword)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "  Count:   {}", model.count_text)?;
        writeln!(self.out, "  Average: {}", model.average_text)?;
        writeln!(self.out, "  Max:     {}", model.max_text)?;
        writeln!(self.out, "  Min:     {}", model.min_text)?;
        writeln!(self.out, "  Range:   {}", model.range_text)?;
        writeln!(self.out)?;

        self.histogram(&model.histogram.labels, &model.histogram.values)?;

        if !model.top_prices.is_empty() {
            writeln!(self.out, "Prices:")?;
            for (i, price) in model.top_prices.iter().enumerate() {
                writeln!(self.out, "  {:>2}. {price}", i + 1)?;
            }
            writeln!(self.out)?;
        }

        match &model.save_button {
            SaveButtonState::Saved(filename) => writeln!(self.out, "Saved as {filename}"),
            SaveButtonState::Unsaved => writeln!(self.out, "Not saved"),
        }
    }

    fn histogram(&mut self, labels: &[String], values: &[u64]) -> io::Result<()> {
        let Some(&peak) = values.iter().max() else {
            return writeln!(self.out, "(no price distribution)");
        };
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let bar_width = BAR_WIDTH;

        writeln!(self.out, "Price distribution:")?;
        for (label, &value) in labels.iter().zip(values) {
            let bar = if peak == 0 {
                0
            } else {
                (value as usize * BAR_WIDTH).div_ceil(peak as usize)
            };
            writeln!(
                self.out,
                "  {label:>label_width$} | {:<bar_width$} {value}",
                "#".repeat(bar)
            )?;
        }
        writeln!(self.out)
    }

    pub fn history(&mut self, items: &[HistoryItemModel]) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(self.out, "No saved searches.");
        }
        for item in items {
            writeln!(self.out, "{}  [{}]  {}", item.date, item.keyword, item.filename)?;
            writeln!(
                self.out,
                "    count {}  avg {}  max {}  min {}",
                item.count_text, item.average_text, item.max_text, item.min_text
            )?;
        }
        Ok(())
    }
}
