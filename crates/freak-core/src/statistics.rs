//! Central-tendency and dispersion statistics over a byte sequence.
//!
//! Mean, median, mode, anti-mode, population variance and standard deviation.
//! The median is read from cumulative histogram counts, which gives the same
//! answer as sorting the input without allocating a sorted copy.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::histogram::{ByteHistogram, compute_histogram};

/// Summary statistics for one byte sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsRecord {
    pub mean: f64,
    pub median: f64,
    /// Most frequent byte value (lowest value wins ties).
    pub mode: u8,
    pub mode_count: u64,
    /// `mode_count` divided by the homogeneous count `total / 256`.
    pub mode_count_ratio: f64,
    /// Least frequent byte value among those present (lowest value wins ties).
    pub anti_mode: u8,
    pub anti_mode_count: u64,
    pub anti_mode_count_ratio: f64,
    /// Population variance (divisor = count).
    pub variance: f64,
    pub standard_deviation: f64,
    /// Number of byte values that occur at least once.
    pub distinct_values: usize,
}

/// Compute statistics for `data`.
///
/// Fails with [`AnalysisError::EmptyInput`] on an empty sequence.
pub fn compute_statistics(data: &[u8]) -> Result<StatisticsRecord> {
    let histogram = compute_histogram(data);
    statistics_from_histogram(data, &histogram)
}

/// Compute statistics reusing a histogram already built from `data`.
///
/// Fails with [`AnalysisError::Configuration`] when the histogram total does
/// not match the input length.
pub fn statistics_from_histogram(
    data: &[u8],
    histogram: &ByteHistogram,
) -> Result<StatisticsRecord> {
    if data.is_empty() || histogram.is_empty() {
        return Err(AnalysisError::empty("statistics"));
    }
    if histogram.total() != data.len() as u64 {
        return Err(AnalysisError::Configuration(
            "histogram total does not match input length".into(),
        ));
    }

    let n = data.len() as f64;
    let sum: u64 = data.iter().map(|&b| b as u64).sum();
    let mean = sum as f64 / n;

    let variance = data
        .iter()
        .map(|&b| (b as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    let median = median(histogram);
    let (mode, mode_count) = mode(histogram);
    let (anti_mode, anti_mode_count) = anti_mode(histogram);

    let homogeneous = histogram.homogeneous_count();

    Ok(StatisticsRecord {
        mean,
        median,
        mode,
        mode_count,
        mode_count_ratio: mode_count as f64 / homogeneous,
        anti_mode,
        anti_mode_count,
        anti_mode_count_ratio: anti_mode_count as f64 / homogeneous,
        variance,
        standard_deviation: variance.sqrt(),
        distinct_values: histogram.distinct_values(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Textbook median: middle element for odd counts, mean of the two middle
/// elements for even counts. Caller guarantees a nonempty histogram.
fn median(histogram: &ByteHistogram) -> f64 {
    let total = histogram.total();
    let upper = histogram.nth_smallest(total / 2).unwrap_or(0) as f64;
    if total % 2 == 1 {
        return upper;
    }
    let lower = histogram.nth_smallest(total / 2 - 1).unwrap_or(0) as f64;
    (lower + upper) / 2.0
}

/// First strict maximum scanning 0 → 255.
fn mode(histogram: &ByteHistogram) -> (u8, u64) {
    let mut best = (0u8, 0u64);
    for (b, c) in histogram.iter() {
        if c > best.1 {
            best = (b, c);
        }
    }
    best
}

/// First strict minimum among present values scanning 0 → 255.
fn anti_mode(histogram: &ByteHistogram) -> (u8, u64) {
    let mut best: Option<(u8, u64)> = None;
    for (b, c) in histogram.iter().filter(|&(_, c)| c > 0) {
        match best {
            Some((_, min)) if c >= min => {}
            _ => best = Some((b, c)),
        }
    }
    best.unwrap_or((0, 0))
}
