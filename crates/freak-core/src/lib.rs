//! # freak-core
//!
//! **Frequency and cryptanalysis statistics for arbitrary byte sequences.**
//!
//! `freak-core` characterizes ciphertext or binary data the way an analyst
//! would by hand: a dense byte histogram, central-tendency statistics, Shannon
//! entropy, and the Kappa index of coincidence, plus columnar splitting to
//! attack fixed-length repeating-key (Vigenère-style) ciphers.
//!
//! ## Quick Start
//!
//! ```
//! use freak_core::{compute_histogram, compute_ioc_table, compute_statistics, split_columns};
//!
//! let data = b"LXFOPVEFRNHR LXFOPVEFRNHR LXFOPVEFRNHR";
//!
//! let histogram = compute_histogram(data);
//! assert_eq!(histogram.total(), data.len() as u64);
//!
//! let stats = compute_statistics(data).unwrap();
//! println!("mode {} seen {} times", stats.mode, stats.mode_count);
//!
//! // The 13-byte block repeats, so shift 13 lights up.
//! let ioc = compute_ioc_table(data, 49).unwrap();
//! assert_eq!(ioc.peak().map(|(shift, _)| shift), Some(13));
//!
//! let columns = split_columns(data, 13).unwrap();
//! assert_eq!(columns.len(), 13);
//! ```
//!
//! ## Architecture
//!
//! Bytes → Histogram → {Statistics, Entropy}; Bytes → IOC scan;
//! Bytes → Columns → per-column {Histogram, Statistics, Entropy}.
//!
//! Everything is pure, synchronous, and works on a slice already in memory.

pub mod analysis;
pub mod columnar;
pub mod entropy;
pub mod error;
pub mod histogram;
pub mod ioc;
pub mod statistics;

pub use analysis::{AnalysisConfig, ByteAnalysis, full_analysis};
pub use columnar::{ColumnAnalysis, analyze_columns, interleave_columns, split_columns};
pub use entropy::{MAX_ENTROPY_BITS, compute_entropy, entropy_ratio};
pub use error::{AnalysisError, Result};
pub use histogram::{ByteHistogram, compute_histogram};
pub use ioc::{DEFAULT_MAX_SHIFT, IocTable, ShiftCoincidence, compute_ioc_table};
pub use statistics::{StatisticsRecord, compute_statistics, statistics_from_histogram};

/// Number of distinct byte values.
pub const MODULUS: usize = 256;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
