//! Histogram binning, stats and number formatting.

use price_dashboard::config::BIN_COUNT;
use price_dashboard::format::format_grouped;
use price_dashboard::{build_histogram, Stats};

// ---------------------------------------------------------------------------
// build_histogram
// ---------------------------------------------------------------------------

#[test]
fn empty_input_yields_empty_histogram() {
    let hist = build_histogram(&[]);
    assert!(hist.labels.is_empty());
    assert!(hist.values.is_empty());
}

#[test]
fn non_empty_input_yields_twenty_bins_summing_to_len() {
    let samples: Vec<f64> = (0..137).map(|i| 1_000.0 + (i * i % 97) as f64 * 313.0).collect();
    let hist = build_histogram(&samples);
    assert_eq!(hist.labels.len(), BIN_COUNT);
    assert_eq!(hist.values.len(), BIN_COUNT);
    assert_eq!(hist.total(), samples.len() as u64);
}

#[test]
fn worked_example_places_extremes_in_first_and_last_bins() {
    let hist = build_histogram(&[10.0, 20.0, 20.0, 30.0, 40.0]);

    // width = (40 - 10) / 20 = 1.5
    assert_eq!(hist.values[0], 1);
    assert_eq!(hist.values[6], 2); // (20 - 10) / 1.5 = 6.67
    assert_eq!(hist.values[13], 1); // (30 - 10) / 1.5 = 13.3
    assert_eq!(hist.values[19], 1); // 40 clamps to the last bin
    assert_eq!(hist.total(), 5);

    assert_eq!(hist.labels[0], "10");
    assert_eq!(hist.labels[2], "13");
    assert_eq!(hist.labels[19], "39"); // 10 + 19 * 1.5 = 38.5, rounded
}

#[test]
fn equal_samples_put_all_mass_in_first_bin() {
    let hist = build_histogram(&[5_000.0; 7]);
    assert_eq!(hist.values.len(), BIN_COUNT);
    assert_eq!(hist.values[0], 7);
    assert!(hist.values[1..].iter().all(|&v| v == 0));
    assert!(hist.labels.iter().all(|l| l == "5,000"));
}

#[test]
fn single_sample_is_a_degenerate_range() {
    let hist = build_histogram(&[42.0]);
    assert_eq!(hist.values[0], 1);
    assert_eq!(hist.total(), 1);
}

#[test]
fn permutations_produce_identical_output() {
    let samples = vec![15_900.0, 62_000.0, 22_000.0, 49_000.0, 15_900.0, 35_500.0, 59_000.0];
    let mut reversed = samples.clone();
    reversed.reverse();
    let mut sorted = samples.clone();
    sorted.sort_by(f64::total_cmp);
    let mut rotated = samples.clone();
    rotated.rotate_left(3);

    let expected = build_histogram(&samples);
    assert_eq!(build_histogram(&reversed), expected);
    assert_eq!(build_histogram(&sorted), expected);
    assert_eq!(build_histogram(&rotated), expected);
}

#[test]
fn labels_are_grouped_lower_bounds() {
    let hist = build_histogram(&[1_000_000.0, 3_000_000.0]);
    // width = 100,000
    assert_eq!(hist.labels[0], "1,000,000");
    assert_eq!(hist.labels[1], "1,100,000");
    assert_eq!(hist.labels[19], "2,900,000");
    assert_eq!(hist.values[0], 1);
    assert_eq!(hist.values[19], 1);
}

#[test]
fn non_finite_samples_are_skipped() {
    let hist = build_histogram(&[f64::NAN, 10.0, f64::INFINITY, 20.0]);
    assert_eq!(hist.total(), 2);
    assert_eq!(hist.labels[0], "10");

    assert!(build_histogram(&[f64::NAN]).is_empty());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[test]
fn stats_of_worked_example() {
    let stats = Stats::from_prices(&[10.0, 20.0, 20.0, 30.0, 40.0]);
    assert_eq!(stats.count, 5);
    assert_eq!(stats.average, 24.0);
    assert_eq!(stats.max, 40.0);
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.range(), 30.0);
}

#[test]
fn stats_of_empty_set_are_zero() {
    assert_eq!(Stats::from_prices(&[]), Stats::default());
    assert_eq!(Stats::from_prices(&[]).count, 0);
}

#[test]
fn stats_average_lies_between_extremes() {
    let prices = [0.1, 0.2, 0.3, 0.1, 0.1, 0.1];
    let stats = Stats::from_prices(&prices);
    assert!(stats.min <= stats.average && stats.average <= stats.max);

    let same = Stats::from_prices(&[0.1; 10]);
    assert_eq!(same.average, 0.1);
}

// ---------------------------------------------------------------------------
// format_grouped
// ---------------------------------------------------------------------------

#[test]
fn format_grouped_inserts_commas() {
    assert_eq!(format_grouped(0.0), "0");
    assert_eq!(format_grouped(999.0), "999");
    assert_eq!(format_grouped(1_000.0), "1,000");
    assert_eq!(format_grouped(123_456_789.0), "123,456,789");
}

#[test]
fn format_grouped_rounds_to_nearest_integer() {
    assert_eq!(format_grouped(24_999.5), "25,000");
    assert_eq!(format_grouped(24_999.4), "24,999");
}

#[test]
fn format_grouped_handles_negative_and_non_finite() {
    assert_eq!(format_grouped(-1_234.0), "-1,234");
    assert_eq!(format_grouped(f64::NAN), "0");
}
