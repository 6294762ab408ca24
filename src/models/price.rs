use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Stats — Summary statistics for one sample set
// ---------------------------------------------------------------------------

/// Count, mean and extremes of a price sample set.
///
/// Every field defaults to zero, both for an empty sample set and for
/// partially populated payloads (older saved records may carry `{}` or
/// `null` values).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub average: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub min: f64,
}

impl Stats {
    /// Compute stats over `prices`, ignoring non-finite samples.
    pub fn from_prices(prices: &[f64]) -> Self {
        let mut count = 0u64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &p in prices.iter().filter(|p| p.is_finite()) {
            count += 1;
            sum += p;
            min = min.min(p);
            max = max.max(p);
        }

        if count == 0 {
            return Self::default();
        }

        // Clamp so rounding error in the sum never breaks min <= average <= max.
        let average = (sum / count as f64).clamp(min, max);
        Self {
            count,
            average,
            max,
            min,
        }
    }

    /// `max - min`, zero for an empty set.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

// ---------------------------------------------------------------------------
// Histogram — Fixed-bin frequency distribution
// ---------------------------------------------------------------------------

/// Bar chart data: one label (bin lower bound) per bin and its count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Histogram {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total number of samples across all bins.
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// PriceResult — The session's current result
// ---------------------------------------------------------------------------

/// The full outcome of one search or history load.
///
/// A new value replaces the previous one wholesale; results are never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub keyword: String,
    pub stats: Stats,
    pub prices: Vec<f64>,
    pub histogram: Histogram,
    pub saved_filename: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
