//! Transform engines for real-valued signals
//!
//! A `TransformEngine` runs unnormalized 1-D real-to-complex and
//! complex-to-real transforms. Scaling and buffer-length derivation are left
//! to the caller.

use crate::error::{try_filled, FilterError, Result};
use num_complex::Complex;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

/// Number of non-redundant bins for an `n`-sample real signal
pub fn num_bins(n: usize) -> usize {
    n / 2 + 1
}

/// Convert bin index to normalized frequency (units of π rad/sample)
pub fn bin_to_frequency(bin: usize, n: usize) -> f64 {
    2.0 * bin as f64 / n as f64
}

/// Real-to-complex / complex-to-real transform capability
pub trait TransformEngine {
    /// Forward transform of `signal` into `num_bins(signal.len())` bins.
    ///
    /// The output is unnormalized.
    fn forward_real_to_complex(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>>;

    /// Inverse transform of a half spectrum into `output_len` real samples.
    ///
    /// `spectrum.len()` must equal `num_bins(output_len)`. The output is
    /// unnormalized (scaled by `output_len` relative to the original signal).
    fn inverse_complex_to_real(
        &self,
        spectrum: &[Complex<f64>],
        output_len: usize,
    ) -> Result<Vec<f64>>;
}

fn check_lengths(spectrum: &[Complex<f64>], output_len: usize) -> Result<()> {
    if output_len == 0 {
        return Err(FilterError::EmptySignal);
    }
    let expected = num_bins(output_len);
    if spectrum.len() != expected {
        return Err(FilterError::LengthMismatch {
            expected,
            actual: spectrum.len(),
        });
    }
    Ok(())
}

/// Copy of `spectrum` with the imaginary parts of the DC and (for even
/// lengths) Nyquist bins cleared. Those bins are real for any real signal.
fn hermitian_half(spectrum: &[Complex<f64>], output_len: usize) -> Result<Vec<Complex<f64>>> {
    let mut half = try_filled(spectrum.len(), Complex::new(0.0, 0.0))?;
    half.copy_from_slice(spectrum);
    half[0].im = 0.0;
    if output_len % 2 == 0 {
        if let Some(nyquist) = half.last_mut() {
            nyquist.im = 0.0;
        }
    }
    Ok(half)
}

/// Engine backed by `realfft`
///
/// Plans are created per call; nothing is cached between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFftEngine;

impl TransformEngine for RealFftEngine {
    fn forward_real_to_complex(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>> {
        let n = signal.len();
        if n == 0 {
            return Err(FilterError::EmptySignal);
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(n);

        // realfft uses the input buffer as scratch
        let mut input = try_filled(n, 0.0)?;
        input.copy_from_slice(signal);
        let mut output = try_filled(num_bins(n), Complex::new(0.0, 0.0))?;

        r2c.process(&mut input, &mut output)?;
        tracing::trace!(n, engine = "realfft", "forward transform");

        Ok(output)
    }

    fn inverse_complex_to_real(
        &self,
        spectrum: &[Complex<f64>],
        output_len: usize,
    ) -> Result<Vec<f64>> {
        check_lengths(spectrum, output_len)?;

        let mut planner = RealFftPlanner::<f64>::new();
        let c2r = planner.plan_fft_inverse(output_len);

        let mut input = hermitian_half(spectrum, output_len)?;
        let mut output = try_filled(output_len, 0.0)?;

        c2r.process(&mut input, &mut output)?;
        tracing::trace!(n = output_len, engine = "realfft", "inverse transform");

        Ok(output)
    }
}

/// Engine backed by a full-length complex `rustfft` transform
///
/// Slower than `RealFftEngine` (it transforms all N bins), but shares no
/// code path with it, which makes it a useful reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexFftEngine;

impl TransformEngine for ComplexFftEngine {
    fn forward_real_to_complex(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>> {
        let n = signal.len();
        if n == 0 {
            return Err(FilterError::EmptySignal);
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);

        let mut buffer = try_filled(n, Complex::new(0.0, 0.0))?;
        for (slot, &x) in buffer.iter_mut().zip(signal) {
            *slot = Complex::new(x, 0.0);
        }
        fft.process(&mut buffer);
        tracing::trace!(n, engine = "rustfft", "forward transform");

        // Upper half is the conjugate mirror of the lower half
        buffer.truncate(num_bins(n));
        Ok(buffer)
    }

    fn inverse_complex_to_real(
        &self,
        spectrum: &[Complex<f64>],
        output_len: usize,
    ) -> Result<Vec<f64>> {
        check_lengths(spectrum, output_len)?;

        let half = hermitian_half(spectrum, output_len)?;
        let mut buffer = try_filled(output_len, Complex::new(0.0, 0.0))?;
        buffer[..half.len()].copy_from_slice(&half);
        for k in half.len()..output_len {
            buffer[k] = half[output_len - k].conj();
        }

        let mut planner = FftPlanner::<f64>::new();
        let ifft = planner.plan_fft_inverse(output_len);
        ifft.process(&mut buffer);
        tracing::trace!(n = output_len, engine = "rustfft", "inverse transform");

        let mut output = try_filled(output_len, 0.0)?;
        for (out, c) in output.iter_mut().zip(&buffer) {
            *out = c.re;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn engines() -> Vec<Box<dyn TransformEngine>> {
        vec![Box::new(RealFftEngine), Box::new(ComplexFftEngine)]
    }

    #[test]
    fn test_num_bins() {
        assert_eq!(num_bins(1), 1);
        assert_eq!(num_bins(8), 5);
        assert_eq!(num_bins(9), 5);
        assert_eq!(num_bins(1024), 513);
    }

    #[test]
    fn test_bin_to_frequency() {
        assert_eq!(bin_to_frequency(0, 1024), 0.0);
        assert!((bin_to_frequency(512, 1024) - 1.0).abs() < 1e-12);  // Nyquist
    }

    #[test]
    fn test_forward_dc_signal() {
        for engine in engines() {
            let spectrum = engine.forward_real_to_complex(&[2.0; 16]).unwrap();

            assert_eq!(spectrum.len(), 9);
            // Unnormalized: DC = sum of samples
            assert_abs_diff_eq!(spectrum[0].re, 32.0, epsilon = 1e-10);
            for bin in &spectrum[1..] {
                assert!(bin.norm() < 1e-10);
            }
        }
    }

    #[test]
    fn test_forward_cosine_peak() {
        let n = 64;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / n as f64).cos())
            .collect();

        for engine in engines() {
            let spectrum = engine.forward_real_to_complex(&signal).unwrap();
            // A unit cosine on bin k has magnitude N/2 there
            assert_abs_diff_eq!(spectrum[5].re, 32.0, epsilon = 1e-9);
            assert_abs_diff_eq!(spectrum[5].im, 0.0, epsilon = 1e-9);
            assert!(spectrum[4].norm() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip_is_scaled_by_n() {
        for n in [1usize, 2, 7, 8] {
            let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() + 0.3).collect();
            for engine in engines() {
                let spectrum = engine.forward_real_to_complex(&signal).unwrap();
                let raw = engine.inverse_complex_to_real(&spectrum, n).unwrap();
                for (r, s) in raw.iter().zip(&signal) {
                    assert_abs_diff_eq!(r / n as f64, *s, epsilon = 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_engines_agree() {
        let signal: Vec<f64> = (0..37).map(|i| ((i * i) % 11) as f64 - 4.0).collect();
        let a = RealFftEngine.forward_real_to_complex(&signal).unwrap();
        let b = ComplexFftEngine.forward_real_to_complex(&signal).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).norm() < 1e-9);
        }
    }

    #[test]
    fn test_inverse_ignores_dc_imaginary_part() {
        let spectrum = vec![Complex::new(4.0, 3.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
        for engine in engines() {
            let raw = engine.inverse_complex_to_real(&spectrum, 4).unwrap();
            for x in raw {
                assert_abs_diff_eq!(x, 4.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_empty_and_mismatched_input() {
        for engine in engines() {
            assert!(matches!(
                engine.forward_real_to_complex(&[]),
                Err(FilterError::EmptySignal)
            ));
            let spectrum = vec![Complex::new(1.0, 0.0); 3];
            assert!(matches!(
                engine.inverse_complex_to_real(&spectrum, 8),
                Err(FilterError::LengthMismatch { expected: 5, actual: 3 })
            ));
            assert!(matches!(
                engine.inverse_complex_to_real(&spectrum, 0),
                Err(FilterError::EmptySignal)
            ));
        }
    }
}
