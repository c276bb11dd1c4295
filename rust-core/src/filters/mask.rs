//! Retained-bin sets and spectrum masking

use crate::error::{try_collect, try_filled, FilterError, Result};
use crate::spectrum::analysis::{dominant_bin, top_k_bins};
use num_complex::Complex;

/// Bins copied unchanged into the masked spectrum
///
/// Always contains the DC bin. Indices are kept sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedSet {
    indices: Vec<usize>,
    num_bins: usize,
}

impl RetainedSet {
    /// Only the DC bin
    pub fn dc_only(num_bins: usize) -> Result<Self> {
        Self::with_dc(num_bins, 1)
    }

    /// DC plus the strongest non-DC bin, if any bin carries energy
    pub fn single_peak(spectrum: &[Complex<f64>]) -> Result<Self> {
        let mut set = Self::with_dc(spectrum.len(), 2)?;
        if let Some(peak) = dominant_bin(spectrum) {
            set.indices.push(peak);
        }
        Ok(set)
    }

    /// DC plus the `k` strongest non-DC bins (`k` clamped to N/2)
    pub fn top_k(spectrum: &[Complex<f64>], k: usize) -> Result<Self> {
        let strongest = top_k_bins(spectrum, k)?;
        let mut set = Self::with_dc(spectrum.len(), strongest.len() + 1)?;
        set.indices.extend(strongest);
        set.indices.sort_unstable();
        Ok(set)
    }

    /// Every bin except `excluded`; DC is kept even when listed
    pub fn all_except(num_bins: usize, excluded: &[usize]) -> Result<Self> {
        if num_bins == 0 {
            return Err(FilterError::EmptySpectrum);
        }
        if let Some(&index) = excluded.iter().find(|&&i| i >= num_bins) {
            return Err(FilterError::BinOutOfRange { index, num_bins });
        }

        let mut excluded = try_collect(excluded.iter().copied())?;
        excluded.sort_unstable();
        excluded.dedup();

        let mut indices = Vec::new();
        indices.try_reserve_exact(num_bins - excluded.len() + 1)?;
        indices.extend((0..num_bins).filter(|i| *i == 0 || excluded.binary_search(i).is_err()));
        Ok(Self { indices, num_bins })
    }

    fn with_dc(num_bins: usize, capacity: usize) -> Result<Self> {
        let mut indices = Vec::new();
        indices.try_reserve_exact(capacity)?;
        indices.push(0);
        Ok(Self { indices, num_bins })
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Retained indices in ascending order (DC first)
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of retained bins other than DC
    pub fn non_dc_count(&self) -> usize {
        self.indices.len() - 1
    }

    /// Fresh copy of `spectrum` with every non-retained bin zeroed
    pub fn apply(&self, spectrum: &[Complex<f64>]) -> Result<Vec<Complex<f64>>> {
        if spectrum.is_empty() {
            return Err(FilterError::EmptySpectrum);
        }
        if spectrum.len() != self.num_bins {
            return Err(FilterError::LengthMismatch {
                expected: self.num_bins,
                actual: spectrum.len(),
            });
        }

        let mut masked = try_filled(spectrum.len(), Complex::new(0.0, 0.0))?;
        for &index in &self.indices {
            masked[index] = spectrum[index];
        }
        Ok(masked)
    }
}
