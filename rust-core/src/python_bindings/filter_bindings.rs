//! Python bindings for the dominant-frequency filter

use pyo3::prelude::*;
use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use crate::error::FilterError;
use crate::filters::{FilterConfig, Retention, SpectralFilter};
use crate::spectrum::analysis::magnitude_spectrum;

fn to_py_err(err: FilterError) -> PyErr {
    match err {
        FilterError::Allocation(_) => {
            PyErr::new::<pyo3::exceptions::PyMemoryError, _>(err.to_string())
        }
        _ => PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()),
    }
}

fn contiguous<'a, T: numpy::Element>(array: &'a PyReadonlyArray1<T>) -> PyResult<&'a [T]> {
    array.as_slice().map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Array must be contiguous: {}", e))
    })
}

/// Dominant-frequency spectral filter exposed to Python
#[pyclass(name = "SpectralFilter")]
pub struct PySpectralFilter {
    filter: SpectralFilter,
}

#[pymethods]
impl PySpectralFilter {
    #[new]
    fn new() -> Self {
        Self {
            filter: SpectralFilter::new(FilterConfig::default()),
        }
    }

    /// Keep the mean plus the strongest frequency component(s)
    ///
    /// Args:
    ///     signal: Input samples as numpy array
    ///     max_to_process: Number of components to keep (None keeps the single
    ///         strongest; negative values keep none)
    ///
    /// Returns:
    ///     Filtered signal as numpy array (same length as input)
    #[pyo3(signature = (signal, max_to_process=None))]
    fn process<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        max_to_process: Option<i64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = contiguous(&signal)?;
        let retention = max_to_process.map_or(Retention::SinglePeak, Retention::from_signed);
        let output = self.filter.apply(input, retention).map_err(to_py_err)?;

        Ok(PyArray1::from_vec(py, output))
    }

    /// Signal minus its single-peak reconstruction
    fn residual<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = contiguous(&signal)?;
        let output = self.filter.residual(input).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Unnormalized real-to-complex transform
    ///
    /// Returns:
    ///     Complex numpy array of length N/2 + 1
    fn forward<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let input = contiguous(&signal)?;
        let spectrum = self.filter.forward_transform(input).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Unnormalized complex-to-real transform into 2L - 1 samples
    ///
    /// Assumes the spectrum came from an odd-length signal; use
    /// backward_exact when the original length is known.
    fn backward<'py>(
        &self,
        py: Python<'py>,
        spectrum: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = contiguous(&spectrum)?;
        let output = self.filter.inverse_transform(input).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Unnormalized complex-to-real transform into exactly n samples
    fn backward_exact<'py>(
        &self,
        py: Python<'py>,
        spectrum: PyReadonlyArray1<Complex64>,
        n: usize,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = contiguous(&spectrum)?;
        let output = self
            .filter
            .inverse_transform_exact(input, n)
            .map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, output))
    }

    /// Magnitude of every bin, DC included
    fn magnitudes<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = contiguous(&signal)?;
        let spectrum = self.filter.forward_transform(input).map_err(to_py_err)?;
        let magnitudes = magnitude_spectrum(&spectrum).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, magnitudes))
    }

    /// Non-DC bins, strongest first
    ///
    /// Returns:
    ///     List of (bin_index, magnitude) tuples
    fn ranking(&self, signal: PyReadonlyArray1<f64>) -> PyResult<Vec<(usize, f64)>> {
        let input = contiguous(&signal)?;
        let ranking = self.filter.ranking(input).map_err(to_py_err)?;
        Ok(ranking.into_iter().map(|e| (e.index, e.magnitude)).collect())
    }
}
