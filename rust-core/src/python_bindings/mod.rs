//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod filter_bindings;
mod data_bindings;

/// Python module definition
#[pymodule]
fn spectral_filter(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<filter_bindings::PySpectralFilter>()?;

    m.add_function(wrap_pyfunction!(data_bindings::py_load_signal, m)?)?;
    m.add_function(wrap_pyfunction!(data_bindings::py_write_signal, m)?)?;

    Ok(())
}
