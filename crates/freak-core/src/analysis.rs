//! One-shot analysis pipeline over an in-memory byte sequence.
//!
//! Runs the histogram, central-tendency statistics, Shannon entropy, Kappa
//! index of coincidence and (optionally) per-column analysis, and bundles the
//! results into a serializable [`ByteAnalysis`] report.

use serde::Serialize;

use crate::columnar::{ColumnAnalysis, analyze_columns};
use crate::entropy::compute_entropy;
use crate::error::{AnalysisError, Result};
use crate::histogram::{ByteHistogram, compute_histogram};
use crate::ioc::{DEFAULT_MAX_SHIFT, IocTable, compute_ioc_table};
use crate::statistics::{StatisticsRecord, statistics_from_histogram};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunables for [`full_analysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    /// Highest shift scanned by the index of coincidence.
    pub max_shift: usize,
    /// When set, also split the input into this many columns and analyze each.
    pub columns: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_shift: DEFAULT_MAX_SHIFT,
            columns: None,
        }
    }
}

impl AnalysisConfig {
    /// Reject parameters the scanner and splitter cannot accept.
    pub fn validate(&self) -> Result<()> {
        if self.max_shift == 0 {
            return Err(AnalysisError::Configuration(
                "shift cap must be at least 1".to_string(),
            ));
        }
        if self.columns == Some(0) {
            return Err(AnalysisError::Configuration(
                "column count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Full analysis of one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ByteAnalysis {
    /// Parameters the report was produced with.
    pub config: AnalysisConfig,
    pub sample_size: usize,
    pub histogram: ByteHistogram,
    pub statistics: StatisticsRecord,
    /// Shannon entropy in bits per byte.
    pub entropy: f64,
    pub ioc: IocTable,
    /// Empty unless [`AnalysisConfig::columns`] was set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnAnalysis>,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run every analysis on `data`.
///
/// Empty input and invalid configuration are rejected before any work is
/// done.
pub fn full_analysis(data: &[u8], config: &AnalysisConfig) -> Result<ByteAnalysis> {
    config.validate()?;
    if data.is_empty() {
        return Err(AnalysisError::empty("analysis"));
    }
    log::debug!("full analysis of {} bytes ({config:?})", data.len());

    let histogram = compute_histogram(data);
    let statistics = statistics_from_histogram(data, &histogram)?;
    let entropy = compute_entropy(&histogram, histogram.total())?;
    let ioc = compute_ioc_table(data, config.max_shift)?;
    let columns = match config.columns {
        Some(n) => analyze_columns(data, n)?,
        None => Vec::new(),
    };

    Ok(ByteAnalysis {
        config: *config,
        sample_size: data.len(),
        histogram,
        statistics,
        entropy,
        ioc,
        columns,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
