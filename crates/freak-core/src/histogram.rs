//! Dense byte-value histogram.
//!
//! The symbol universe is fixed at 256 values, so the table is a plain
//! `[u64; 256]` indexed by byte value. Every other component is built on it.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::MODULUS;

/// Occurrence counts for all 256 byte values, zero entries included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; MODULUS],
    total: u64,
}

/// Count every byte value in `data`.
///
/// Empty input yields an all-zero table with `total() == 0`.
pub fn compute_histogram(data: &[u8]) -> ByteHistogram {
    let mut counts = [0u64; MODULUS];
    for &b in data {
        counts[b as usize] += 1;
    }
    ByteHistogram {
        counts,
        total: data.len() as u64,
    }
}

impl ByteHistogram {
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn counts(&self) -> &[u64; MODULUS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of `byte` in the input, in percent. 0.0 for an empty histogram.
    pub fn percent(&self, byte: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(byte) as f64 / self.total as f64 * 100.0
    }

    /// Expected per-value count if the input were perfectly uniform.
    pub fn homogeneous_count(&self) -> f64 {
        self.total as f64 / MODULUS as f64
    }

    /// Number of byte values that occur at least once.
    pub fn distinct_values(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// `(byte, count)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(b, &c)| (b as u8, c))
    }

    /// `(byte, count)` pairs by descending count; equal counts keep ascending
    /// byte order.
    pub fn ranked(&self) -> Vec<(u8, u64)> {
        let mut pairs: Vec<(u8, u64)> = self.iter().collect();
        // Stable sort keeps the byte order among ties.
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// The `k`-th smallest value (0-based) of the input as if it were sorted.
    ///
    /// Walks cumulative counts instead of materializing the sort. Returns
    /// `None` when `k >= total()`.
    pub fn nth_smallest(&self, k: u64) -> Option<u8> {
        if k >= self.total {
            return None;
        }
        let mut seen = 0u64;
        for (b, c) in self.iter() {
            seen += c;
            if k < seen {
                return Some(b);
            }
        }
        None
    }

    /// Shannon entropy of this histogram in bits per byte.
    pub fn entropy(&self) -> crate::Result<f64> {
        crate::entropy::compute_entropy(self, self.total)
    }
}

// serde only derives fixed arrays up to 32 elements; the table goes out as a
// sequence, matching the Vec<u64> histograms elsewhere in JSON reports.
impl Serialize for ByteHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ByteHistogram", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("counts", &self.counts[..])?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_length() {
        let data = b"attack at dawn";
        let hist = compute_histogram(data);
        assert_eq!(hist.counts().iter().sum::<u64>(), data.len() as u64);
        assert_eq!(hist.total(), 14);
        assert_eq!(hist.count(b'a'), 4);
        assert_eq!(hist.count(b't'), 3);
        assert_eq!(hist.count(b'z'), 0);
    }

    #[test]
    fn test_empty_input() {
        let hist = compute_histogram(&[]);
        assert!(hist.is_empty());
        assert!(hist.counts().iter().all(|&c| c == 0));
        assert_eq!(hist.percent(0), 0.0);
        assert_eq!(hist.distinct_values(), 0);
        assert_eq!(hist.nth_smallest(0), None);
    }

    #[test]
    fn test_all_keys_present() {
        let hist = compute_histogram(&[7]);
        assert_eq!(hist.iter().count(), 256);
        assert_eq!(hist.distinct_values(), 1);
    }

    #[test]
    fn test_percent_and_homogeneous_count() {
        let hist = compute_histogram(&[1, 1, 1, 2]);
        assert!((hist.percent(1) - 75.0).abs() < 1e-12);
        assert!((hist.homogeneous_count() - 4.0 / 256.0).abs() < 1e-12);
    }

    #[test]
    fn test_ranked_ties_keep_byte_order() {
        let hist = compute_histogram(&[9, 3, 3, 9, 200]);
        let ranked = hist.ranked();
        assert_eq!(ranked[0], (3, 2));
        assert_eq!(ranked[1], (9, 2));
        assert_eq!(ranked[2], (200, 1));
        assert_eq!(ranked[3], (0, 0));
    }

    #[test]
    fn test_nth_smallest_matches_sort() {
        let data = [50u8, 3, 255, 3, 0, 128, 77];
        let mut sorted = data.to_vec();
        sorted.sort_unstable();
        let hist = compute_histogram(&data);
        for (k, &expected) in sorted.iter().enumerate() {
            assert_eq!(hist.nth_smallest(k as u64), Some(expected));
        }
        assert_eq!(hist.nth_smallest(data.len() as u64), None);
    }

    #[test]
    fn test_serialize_as_sequence() {
        let hist = compute_histogram(&[0, 0, 255]);
        let json = serde_json::to_value(&hist).unwrap();
        assert_eq!(json["total"], 3);
        let counts = json["counts"].as_array().unwrap();
        assert_eq!(counts.len(), 256);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[255], 1);
    }
}
