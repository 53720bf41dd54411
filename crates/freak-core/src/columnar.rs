//! Columnar decomposition for repeating-key analysis.
//!
//! Byte `i` of the input goes to column `i mod n`. With `n` equal to the key
//! length, every column was enciphered by a single key byte and can be attacked
//! as a monoalphabetic substitution.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::histogram::{ByteHistogram, compute_histogram};
use crate::statistics::{StatisticsRecord, statistics_from_histogram};

/// Per-column results of the histogram / statistics / entropy pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAnalysis {
    /// 1-based column number.
    pub column: usize,
    pub sample_size: usize,
    pub histogram: ByteHistogram,
    /// `None` for a column that received no bytes.
    pub statistics: Option<StatisticsRecord>,
    pub entropy: Option<f64>,
}

/// Split `data` round-robin into `columns` sub-sequences.
///
/// Column `r` holds `ceil((len - r) / columns)` bytes, so trailing columns may
/// be one byte shorter (or empty when `columns > len`).
pub fn split_columns(data: &[u8], columns: usize) -> Result<Vec<Vec<u8>>> {
    if columns == 0 {
        return Err(AnalysisError::Configuration(
            "column count must be at least 1".to_string(),
        ));
    }
    let mut out: Vec<Vec<u8>> = (0..columns)
        .map(|r| Vec::with_capacity(column_len(data.len(), columns, r)))
        .collect();
    for (i, &b) in data.iter().enumerate() {
        out[i % columns].push(b);
    }
    log::debug!(
        "split {} bytes into {columns} columns (longest {})",
        data.len(),
        out[0].len()
    );
    Ok(out)
}

/// Inverse of [`split_columns`]: re-interleave columns into one sequence.
///
/// Columns of any length are accepted; a row missing from a shorter column
/// is skipped, so every input byte appears in the output.
pub fn interleave_columns(columns: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = columns.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..rows {
        for col in columns {
            if let Some(&b) = col.get(row) {
                out.push(b);
            }
        }
    }
    out
}

/// Split `data` into `columns` and run the distribution pipeline on each.
///
/// Columns are independent; an empty column reports no statistics rather than
/// failing the whole analysis.
pub fn analyze_columns(data: &[u8], columns: usize) -> Result<Vec<ColumnAnalysis>> {
    let parts = split_columns(data, columns)?;
    Ok(parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let histogram = compute_histogram(part);
            let statistics = statistics_from_histogram(part, &histogram).ok();
            let entropy = histogram.entropy().ok();
            ColumnAnalysis {
                column: i + 1,
                sample_size: part.len(),
                histogram,
                statistics,
                entropy,
            }
        })
        .collect())
}

/// Length of column `r` when `len` bytes are dealt into `columns` columns.
fn column_len(len: usize, columns: usize, r: usize) -> usize {
    if r >= len {
        0
    } else {
        (len - r).div_ceil(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_is_identity() {
        let data = b"polyalphabetic".to_vec();
        assert_eq!(split_columns(&data, 1).unwrap(), vec![data]);
    }

    #[test]
    fn test_two_columns() {
        let cols = split_columns(&[0, 1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(cols, vec![vec![0, 2, 4], vec![1, 3, 5]]);
    }

    #[test]
    fn test_uneven_column_lengths() {
        let data: Vec<u8> = (0..11).collect();
        let cols = split_columns(&data, 4).unwrap();
        let lens: Vec<usize> = cols.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![3, 3, 3, 2]);
        for (r, col) in cols.iter().enumerate() {
            assert_eq!(col.len(), column_len(data.len(), 4, r));
        }
    }

    #[test]
    fn test_more_columns_than_bytes() {
        let cols = split_columns(&[1, 2], 5).unwrap();
        assert_eq!(cols.len(), 5);
        assert_eq!(cols[2], Vec::<u8>::new());
        assert_eq!(interleave_columns(&cols), vec![1, 2]);
    }

    #[test]
    fn test_interleave_round_trip() {
        let data: Vec<u8> = (0..=255u8).rev().chain(0..37).collect();
        for n in [1, 2, 3, 7, 16, 300] {
            let cols = split_columns(&data, n).unwrap();
            assert_eq!(interleave_columns(&cols), data, "n={n}");
        }
    }

    #[test]
    fn test_interleave_keeps_bytes_of_longer_later_columns() {
        assert_eq!(interleave_columns(&[vec![1], vec![2, 3]]), vec![1, 2, 3]);
        assert_eq!(
            interleave_columns(&[vec![], vec![4, 5], vec![6]]),
            vec![4, 6, 5]
        );
        assert!(interleave_columns(&[]).is_empty());
    }

    #[test]
    fn test_zero_columns_is_error() {
        assert!(matches!(
            split_columns(b"abc", 0),
            Err(AnalysisError::Configuration(_))
        ));
    }

    #[test]
    fn test_analyze_columns_isolates_key_bytes() {
        // Each column is constant when the plaintext is constant.
        let key = [3u8, 141, 77];
        let data: Vec<u8> = (0..30).map(|i| b'e'.wrapping_add(key[i % 3])).collect();
        let report = analyze_columns(&data, 3).unwrap();
        assert_eq!(report.len(), 3);
        for (col, k) in report.iter().zip(key) {
            let stats = col.statistics.as_ref().unwrap();
            assert_eq!(stats.mode, b'e'.wrapping_add(k));
            assert_eq!(col.entropy, Some(0.0));
            assert_eq!(col.sample_size, 10);
        }
        assert_eq!(report[0].column, 1);
    }

    #[test]
    fn test_analyze_columns_empty_column() {
        let report = analyze_columns(&[9], 2).unwrap();
        assert!(report[0].statistics.is_some());
        assert!(report[1].statistics.is_none());
        assert!(report[1].entropy.is_none());
    }
}
