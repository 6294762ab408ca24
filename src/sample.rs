//! Synthetic price data for offline demos.
//!
//! Prices follow a normal distribution centred on the middle of a per-keyword
//! range, with a standard deviation of a quarter of the range, clamped to the
//! range and rounded to whole units.

use rand::Rng;

use crate::models::{SavedRecord, Stats};

/// Price range used for keywords without a preset.
pub const DEFAULT_RANGE: (f64, f64) = (10_000.0, 100_000.0);

const PRESETS: &[(&str, (f64, f64))] = &[
    ("wireless mouse", (15_000.0, 120_000.0)),
    ("keyboard", (25_000.0, 180_000.0)),
    ("monitor", (150_000.0, 800_000.0)),
    ("laptop", (500_000.0, 3_000_000.0)),
    ("headset", (20_000.0, 250_000.0)),
];

/// Keywords with a preset price range.
pub fn preset_keywords() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(k, _)| *k)
}

/// The price range for `keyword` (case-insensitive), or [`DEFAULT_RANGE`].
pub fn price_range(keyword: &str) -> (f64, f64) {
    let wanted = keyword.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|(k, _)| *k == wanted)
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_RANGE)
}

/// Draw `count` prices for `keyword`, in draw order.
pub fn generate_prices<R: Rng + ?Sized>(rng: &mut R, keyword: &str, count: usize) -> Vec<f64> {
    let (min, max) = price_range(keyword);
    let mean = (min + max) / 2.0;
    let std_dev = (max - min) / 4.0;

    (0..count)
        .map(|_| (mean + std_dev * standard_normal(rng)).clamp(min, max).trunc())
        .collect()
}

/// A complete saved record for `keyword`, prices sorted ascending.
pub fn sample_record<R: Rng + ?Sized>(rng: &mut R, keyword: &str, count: usize) -> SavedRecord {
    let mut prices = generate_prices(rng, keyword, count);
    prices.sort_by(f64::total_cmp);
    SavedRecord {
        keyword: keyword.to_string(),
        statistics: Stats::from_prices(&prices),
        prices,
    }
}

/// Box-Muller transform over two uniform draws.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // gen::<f64>() is in [0, 1); shift to (0, 1] so ln() stays finite.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
