//! Bin energy ranking
//!
//! Magnitudes are used as the energy proxy. The DC bin (index 0) never takes
//! part in ranking.

use crate::error::{try_collect, Result};
use num_complex::Complex;
use std::cmp::Ordering;

/// Magnitude of one non-DC bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEnergy {
    pub index: usize,
    pub magnitude: f64,
}

impl BinEnergy {
    /// Strongest first; equal magnitudes resolve to the lower index.
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .magnitude
            .total_cmp(&self.magnitude)
            .then(self.index.cmp(&other.index))
    }
}

/// Magnitude |X[k]| for every bin, DC included
pub fn magnitude_spectrum(spectrum: &[Complex<f64>]) -> Result<Vec<f64>> {
    try_collect(spectrum.iter().map(|c| c.norm()))
}

/// Energies of bins 1..len in ascending index order
pub fn bin_energies(spectrum: &[Complex<f64>]) -> Result<Vec<BinEnergy>> {
    try_collect(
        spectrum
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, c)| BinEnergy {
                index,
                magnitude: c.norm(),
            }),
    )
}

/// Index of the strongest non-DC bin
///
/// Scans in ascending order and only moves on a strictly greater magnitude,
/// so the first of several equal peaks wins. Returns `None` when no bin has a
/// magnitude above zero (silent input, or a one-bin spectrum).
pub fn dominant_bin(spectrum: &[Complex<f64>]) -> Option<usize> {
    let mut largest = 0.0;
    let mut winner = None;
    for (index, c) in spectrum.iter().enumerate().skip(1) {
        let magnitude = c.norm();
        if magnitude > largest {
            largest = magnitude;
            winner = Some(index);
        }
    }
    winner
}

/// All non-DC bins, strongest first
pub fn rank_bins(spectrum: &[Complex<f64>]) -> Result<Vec<BinEnergy>> {
    let mut energies = bin_energies(spectrum)?;
    energies.sort_by(BinEnergy::rank_order);
    Ok(energies)
}

/// Indices of the `k` strongest non-DC bins, strongest first
///
/// `k` is clamped to the number of non-DC bins. Uses a partial selection, so
/// only the kept bins are sorted.
pub fn top_k_bins(spectrum: &[Complex<f64>], k: usize) -> Result<Vec<usize>> {
    let mut energies = bin_energies(spectrum)?;
    let k = k.min(energies.len());
    if k == 0 {
        return Ok(Vec::new());
    }

    if k < energies.len() {
        energies.select_nth_unstable_by(k - 1, BinEnergy::rank_order);
        energies.truncate(k);
    }
    energies.sort_by(BinEnergy::rank_order);

    try_collect(energies.into_iter().map(|e| e.index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum_from_magnitudes(mags: &[f64]) -> Vec<Complex<f64>> {
        mags.iter().map(|&m| Complex::new(0.0, m)).collect()
    }

    #[test]
    fn test_dominant_bin_skips_dc() {
        let spectrum = spectrum_from_magnitudes(&[100.0, 1.0, 5.0, 2.0]);
        assert_eq!(dominant_bin(&spectrum), Some(2));
    }

    #[test]
    fn test_dominant_bin_first_of_ties() {
        let spectrum = spectrum_from_magnitudes(&[0.0, 3.0, 7.0, 7.0, 1.0]);
        assert_eq!(dominant_bin(&spectrum), Some(2));
    }

    #[test]
    fn test_dominant_bin_silent() {
        let spectrum = spectrum_from_magnitudes(&[4.0, 0.0, 0.0]);
        assert_eq!(dominant_bin(&spectrum), None);
        assert_eq!(dominant_bin(&spectrum_from_magnitudes(&[4.0])), None);
    }

    #[test]
    fn test_rank_bins_order() {
        let spectrum = spectrum_from_magnitudes(&[9.0, 1.0, 4.0, 4.0, 6.0]);
        let ranked: Vec<usize> = rank_bins(&spectrum)
            .unwrap()
            .iter()
            .map(|e| e.index)
            .collect();
        assert_eq!(ranked, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_top_k_bins() {
        let spectrum = spectrum_from_magnitudes(&[9.0, 1.0, 4.0, 8.0, 6.0, 0.5]);
        assert_eq!(top_k_bins(&spectrum, 0).unwrap(), Vec::<usize>::new());
        assert_eq!(top_k_bins(&spectrum, 1).unwrap(), vec![3]);
        assert_eq!(top_k_bins(&spectrum, 3).unwrap(), vec![3, 4, 2]);
        // Clamped to the five non-DC bins
        assert_eq!(top_k_bins(&spectrum, 50).unwrap(), vec![3, 4, 2, 1, 5]);
    }

    #[test]
    fn test_top_k_ties_prefer_lower_index() {
        let spectrum = spectrum_from_magnitudes(&[0.0, 2.0, 5.0, 2.0, 5.0, 2.0]);
        assert_eq!(top_k_bins(&spectrum, 1).unwrap(), vec![2]);
        assert_eq!(top_k_bins(&spectrum, 3).unwrap(), vec![2, 4, 1]);
    }

    #[test]
    fn test_magnitude_spectrum() {
        let spectrum = vec![Complex::new(3.0, 4.0), Complex::new(0.0, -2.0)];
        assert_eq!(magnitude_spectrum(&spectrum).unwrap(), vec![5.0, 2.0]);
    }

    #[test]
    fn test_bin_energies_skip_dc() {
        let spectrum = spectrum_from_magnitudes(&[7.0, 1.5, 3.0]);
        let energies = bin_energies(&spectrum).unwrap();
        assert_eq!(
            energies,
            vec![
                BinEnergy { index: 1, magnitude: 1.5 },
                BinEnergy { index: 2, magnitude: 3.0 },
            ]
        );
        assert!(bin_energies(&spectrum[..1]).unwrap().is_empty());
    }
}
