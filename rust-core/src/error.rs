//! Error types for spectral filtering

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Signal is empty (at least one sample is required)")]
    EmptySignal,

    #[error("Spectrum is empty (at least one bin is required)")]
    EmptySpectrum,

    #[error("Spectrum length mismatch: expected {expected} bins, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Bin {index} is out of range for a spectrum of {num_bins} bins")]
    BinOutOfRange { index: usize, num_bins: usize },

    #[error("Failed to allocate transform buffer: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Transform failed: {0}")]
    Transform(String),
}

impl From<realfft::FftError> for FilterError {
    fn from(err: realfft::FftError) -> Self {
        FilterError::Transform(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;

/// Allocate a buffer of `len` copies of `value`, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, value);
    Ok(buffer)
}

/// Collect an exact-size iterator, reporting allocation failure instead of
/// aborting.
pub(crate) fn try_collect<I>(iter: I) -> Result<Vec<I::Item>>
where
    I: ExactSizeIterator,
{
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(iter.len())?;
    buffer.extend(iter);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_filled_length() {
        let buffer = try_filled(17, 0.5_f64).unwrap();
        assert_eq!(buffer.len(), 17);
        assert!(buffer.iter().all(|&x| x == 0.5));
    }

    #[test]
    fn test_try_filled_reports_capacity_overflow() {
        let err = try_filled(usize::MAX, 0.0_f64).unwrap_err();
        assert!(matches!(err, FilterError::Allocation(_)));
    }

    #[test]
    fn test_try_collect() {
        let squares = try_collect((1..5usize).map(|i| i * i)).unwrap();
        assert_eq!(squares, vec![1, 4, 9, 16]);
    }

    #[test]
    fn test_try_collect_reports_capacity_overflow() {
        let err = try_collect(0..usize::MAX).unwrap_err();
        assert!(matches!(err, FilterError::Allocation(_)));
    }

    #[test]
    fn test_messages() {
        let err = FilterError::LengthMismatch { expected: 5, actual: 4 };
        assert_eq!(
            err.to_string(),
            "Spectrum length mismatch: expected 5 bins, got 4"
        );
    }
}
