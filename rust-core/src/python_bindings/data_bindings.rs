//! Python bindings for signal files

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::data::{load_signal, write_signal};

/// Load the middle column of a three-column text file
///
/// Args:
///     path: File path
///
/// Returns:
///     Samples as numpy array
#[pyfunction]
#[pyo3(name = "load_signal")]
pub fn py_load_signal<'py>(py: Python<'py>, path: &str) -> PyResult<&'py PyArray1<f64>> {
    let samples = load_signal(path).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string())
    })?;
    Ok(PyArray1::from_vec(py, samples))
}

/// Write samples one per line
#[pyfunction]
#[pyo3(name = "write_signal")]
pub fn py_write_signal(path: &str, samples: Vec<f64>) -> PyResult<()> {
    write_signal(path, &samples).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string())
    })
}
