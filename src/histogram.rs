//! Fixed-bin price histogram.
//!
//! # Example
//!
//! ```rust
//! use price_dashboard::histogram::build_histogram;
//!
//! let hist = build_histogram(&[10.0, 20.0, 20.0, 30.0, 40.0]);
//! assert_eq!(hist.values.len(), 20);
//! assert_eq!(hist.values[0], 1);
//! assert_eq!(hist.values[19], 1);
//! assert_eq!(hist.labels[1], "12"); // 10 + 1.5, rounded
//! ```

use crate::config::BIN_COUNT;
use crate::format::format_grouped;
use crate::models::Histogram;

/// Bin `samples` into [`BIN_COUNT`] equal-width bins spanning `[min, max]`.
///
/// Labels are the rounded lower bound of each bin. A sample equal to `max`
/// lands in the last bin. When every sample is equal the width is zero and
/// the whole mass goes to bin 0. Non-finite samples are skipped.
///
/// The output depends only on the multiset of samples, never on their order.
pub fn build_histogram(samples: &[f64]) -> Histogram {
    let finite: Vec<f64> = samples.iter().copied().filter(|s| s.is_finite()).collect();
    if finite.is_empty() {
        return Histogram::default();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_size = (max - min) / BIN_COUNT as f64;

    let mut values = vec![0u64; BIN_COUNT];
    for &sample in &finite {
        values[bin_index(sample, min, bin_size)] += 1;
    }

    let labels = (0..BIN_COUNT)
        .map(|i| format_grouped(min + i as f64 * bin_size))
        .collect();

    Histogram { labels, values }
}

fn bin_index(sample: f64, min: f64, bin_size: f64) -> usize {
    if bin_size <= 0.0 {
        return 0;
    }
    let raw = ((sample - min) / bin_size).floor();
    // raw is never negative since sample >= min
    (raw as usize).min(BIN_COUNT - 1)
}
