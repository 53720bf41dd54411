//! Shannon entropy over a byte histogram.

use crate::error::{AnalysisError, Result};
use crate::histogram::ByteHistogram;

/// Maximum Shannon entropy of a byte stream, in bits.
pub const MAX_ENTROPY_BITS: f64 = 8.0;

/// Shannon entropy in bits: -Σ p·log2(p) with `p = count / total`.
///
/// Zero counts contribute nothing and are skipped before the logarithm.
/// Fails with [`AnalysisError::EmptyInput`] when `total` is zero.
pub fn compute_entropy(histogram: &ByteHistogram, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(AnalysisError::empty("entropy"));
    }
    let n = total as f64;
    let mut h = 0.0;
    for &c in histogram.counts() {
        if c > 0 {
            let p = c as f64 / n;
            h -= p * p.log2();
        }
    }
    Ok(h)
}

/// Entropy expressed as a share of the 8-bit maximum (0.0 to 1.0).
pub fn entropy_ratio(bits: f64) -> f64 {
    (bits / MAX_ENTROPY_BITS).clamp(0.0, 1.0)
}
