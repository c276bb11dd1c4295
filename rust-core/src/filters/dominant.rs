//! Dominant-frequency spectral filter
//!
//! Transforms a real signal to the frequency domain, keeps the DC term plus
//! the most energetic bin(s), zeroes everything else and transforms back.
//! Every call allocates its own buffers; nothing is shared between calls.

use super::mask::RetainedSet;
use crate::error::{FilterError, Result};
use crate::spectrum::analysis::{rank_bins, BinEnergy};
use crate::spectrum::fft::{num_bins, RealFftEngine, TransformEngine};
use num_complex::Complex;

/// How many non-DC bins survive filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// The single strongest bin (first one on ties)
    #[default]
    SinglePeak,

    /// The `k` strongest bins, clamped to N/2
    TopK(usize),
}

impl Retention {
    /// Top-k retention from a signed count; negative counts keep no bins
    pub fn from_signed(k: i64) -> Self {
        if k <= 0 {
            return Retention::TopK(0);
        }
        Retention::TopK(usize::try_from(k).unwrap_or(usize::MAX))
    }
}

/// Spectral filter configuration
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Retention mode used by [`SpectralFilter::process`]
    pub retention: Retention,
}

/// Dominant-frequency filter over a pluggable transform engine
#[derive(Debug, Clone)]
pub struct SpectralFilter<E = RealFftEngine> {
    config: FilterConfig,
    engine: E,
}

impl SpectralFilter {
    /// Create a filter backed by the realfft engine
    pub fn new(config: FilterConfig) -> Self {
        Self::with_engine(config, RealFftEngine)
    }
}

impl Default for SpectralFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl<E: TransformEngine> SpectralFilter<E> {
    pub fn with_engine(config: FilterConfig, engine: E) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn set_retention(&mut self, retention: Retention) {
        self.config.retention = retention;
    }

    /// Filter using the configured retention mode
    pub fn process(&self, signal: &[f64]) -> Result<Vec<f64>> {
        self.apply(signal, self.config.retention)
    }

    /// Filter using an explicit retention mode
    pub fn apply(&self, signal: &[f64], retention: Retention) -> Result<Vec<f64>> {
        match retention {
            Retention::SinglePeak => self.filter_single_peak(signal),
            Retention::TopK(k) => self.filter_top_k(signal, k),
        }
    }

    /// Keep DC and the strongest non-DC bin
    ///
    /// # Returns
    /// Filtered signal, same length as `signal`, scaled by 1/N
    pub fn filter_single_peak(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let spectrum = self.forward_transform(signal)?;
        let retained = RetainedSet::single_peak(&spectrum)?;
        tracing::debug!(
            n = signal.len(),
            peak = ?retained.indices().get(1),
            "single-peak filter"
        );
        self.reconstruct(&spectrum, &retained, signal.len())
    }

    /// Keep DC and the `k` strongest non-DC bins
    ///
    /// `k >= N/2` keeps every bin; `k == 0` leaves only the mean.
    /// Equal magnitudes are ranked by ascending bin index.
    pub fn filter_top_k(&self, signal: &[f64], k: usize) -> Result<Vec<f64>> {
        let spectrum = self.forward_transform(signal)?;
        let retained = RetainedSet::top_k(&spectrum, k)?;
        tracing::debug!(
            n = signal.len(),
            requested = k,
            retained = retained.non_dc_count(),
            "top-k filter"
        );
        self.reconstruct(&spectrum, &retained, signal.len())
    }

    /// Zero the listed bins and reconstruct; DC is always kept
    pub fn suppress_bins(&self, signal: &[f64], bins: &[usize]) -> Result<Vec<f64>> {
        let spectrum = self.forward_transform(signal)?;
        let retained = RetainedSet::all_except(spectrum.len(), bins)?;
        tracing::debug!(n = signal.len(), suppressed = ?bins, "bin suppression");
        self.reconstruct(&spectrum, &retained, signal.len())
    }

    /// `signal` minus its filtered reconstruction
    pub fn residual(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let mut filtered = self.process(signal)?;
        for (f, &x) in filtered.iter_mut().zip(signal) {
            *f = x - *f;
        }
        Ok(filtered)
    }

    /// Non-DC bins of `signal`, strongest first
    pub fn ranking(&self, signal: &[f64]) -> Result<Vec<BinEnergy>> {
        let spectrum = self.forward_transform(signal)?;
        rank_bins(&spectrum)
    }

    /// Unnormalized real-to-complex transform (N/2+1 bins)
    pub fn forward_transform(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>> {
        if signal.is_empty() {
            return Err(FilterError::EmptySignal);
        }
        self.engine.forward_real_to_complex(signal)
    }

    /// Unnormalized complex-to-real transform of `L` bins into `2L - 1`
    /// samples
    ///
    /// The output length assumes the spectrum came from an odd-length signal.
    /// A spectrum of an even-length signal of N samples comes back as N + 1
    /// samples that do not match the original; use
    /// [`inverse_transform_exact`](Self::inverse_transform_exact) when N is
    /// known.
    pub fn inverse_transform(&self, spectrum: &[Complex<f64>]) -> Result<Vec<f64>> {
        if spectrum.is_empty() {
            return Err(FilterError::EmptySpectrum);
        }
        let n = 2 * spectrum.len() - 1;
        self.engine.inverse_complex_to_real(spectrum, n)
    }

    /// Unnormalized complex-to-real transform into exactly `n` samples
    pub fn inverse_transform_exact(&self, spectrum: &[Complex<f64>], n: usize) -> Result<Vec<f64>> {
        if spectrum.is_empty() {
            return Err(FilterError::EmptySpectrum);
        }
        if n == 0 {
            return Err(FilterError::EmptySignal);
        }
        let expected = num_bins(n);
        if spectrum.len() != expected {
            return Err(FilterError::LengthMismatch {
                expected,
                actual: spectrum.len(),
            });
        }
        self.engine.inverse_complex_to_real(spectrum, n)
    }

    fn reconstruct(
        &self,
        spectrum: &[Complex<f64>],
        retained: &RetainedSet,
        n: usize,
    ) -> Result<Vec<f64>> {
        let masked = retained.apply(spectrum)?;
        let mut output = self.engine.inverse_complex_to_real(&masked, n)?;

        // Forward transform is unnormalized
        let scale = n as f64;
        for sample in output.iter_mut() {
            *sample /= scale;
        }
        Ok(output)
    }
}
