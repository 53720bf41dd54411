//! Kappa index of coincidence (IOC) autocorrelation scan.
//!
//! For each shift the sequence is compared against itself offset by that
//! many positions. Matches are normalized by the count expected from a
//! uniform 256-symbol alphabet, so random data scores about 1.0 at every
//! shift. A repeating-key cipher over natural-language plaintext shows bumps
//! near 2.0 at the key length and its multiples.

use serde::Serialize;

use crate::MODULUS;
use crate::error::{AnalysisError, Result};

/// Default cap on the number of shifts scanned.
pub const DEFAULT_MAX_SHIFT: usize = 49;

/// Coincidence score at a single shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftCoincidence {
    pub shift: usize,
    /// Positions `i` with `data[i] == data[i + shift]`.
    pub matches: usize,
    /// `matches / ((len - shift) / 256)`.
    pub coincidence: f64,
}

/// IOC scores for shifts `1..=min(len - 1, max_shift)`, ordered by shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IocTable {
    pub shifts: Vec<ShiftCoincidence>,
    /// Shift with the highest score (lowest shift wins ties); 0 if empty.
    pub peak_shift: usize,
    pub peak_coincidence: f64,
}

/// Scan shifts `1..=min(data.len() - 1, max_shift)`.
///
/// Inputs shorter than two bytes give an empty table. A `max_shift` of zero
/// is a [`AnalysisError::Configuration`] error.
pub fn compute_ioc_table(data: &[u8], max_shift: usize) -> Result<IocTable> {
    if max_shift == 0 {
        return Err(AnalysisError::Configuration(
            "shift cap must be at least 1".to_string(),
        ));
    }

    let n = data.len();
    let last_shift = max_shift.min(n.saturating_sub(1));
    if last_shift == 0 {
        log::warn!("index of coincidence needs at least 2 bytes, got {n}");
        return Ok(IocTable {
            shifts: Vec::new(),
            peak_shift: 0,
            peak_coincidence: 0.0,
        });
    }
    log::debug!("ioc scan: {n} bytes, shifts 1..={last_shift}");

    let mut shifts = Vec::with_capacity(last_shift);
    let mut peak_shift = 0;
    let mut peak_coincidence = 0.0f64;

    for shift in 1..=last_shift {
        let compared = n - shift;
        let matches = data[..compared]
            .iter()
            .zip(&data[shift..])
            .filter(|(a, b)| a == b)
            .count();
        let coincidence = matches as f64 / (compared as f64 / MODULUS as f64);

        if peak_shift == 0 || coincidence > peak_coincidence {
            peak_shift = shift;
            peak_coincidence = coincidence;
        }

        shifts.push(ShiftCoincidence {
            shift,
            matches,
            coincidence,
        });
    }

    Ok(IocTable {
        shifts,
        peak_shift,
        peak_coincidence,
    })
}

impl IocTable {
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Score at `shift`, if it was scanned.
    pub fn get(&self, shift: usize) -> Option<f64> {
        // Shifts are dense and start at 1.
        shift
            .checked_sub(1)
            .and_then(|i| self.shifts.get(i))
            .map(|s| s.coincidence)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.shifts.iter().map(|s| (s.shift, s.coincidence))
    }

    /// The highest-scoring shift and its score, or `None` for an empty table.
    pub fn peak(&self) -> Option<(usize, f64)> {
        (self.peak_shift > 0).then_some((self.peak_shift, self.peak_coincidence))
    }

    /// Shifts scoring at least `min_score`, ascending.
    pub fn candidate_periods(&self, min_score: f64) -> Vec<usize> {
        self.iter()
            .filter(|&(_, c)| c >= min_score)
            .map(|(s, _)| s)
            .collect()
    }
}
