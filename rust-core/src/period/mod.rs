//! Period search (phase dispersion minimization) interface
//!
//! The search routine itself lives outside this crate. This module only fixes
//! the contract of its two C entry points:
//!
//! ```text
//! int pdm2(int ne, double datx[], double daty[], double sig[]);
//! int pdm2_2(char* file, char* base_directory);
//! ```
//!
//! Hosts that link an implementation expose it through [`PeriodSearch`].

use std::os::raw::c_int;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Observation series is empty")]
    Empty,

    #[error("Column length mismatch: {times} times, {values} values, {sigmas} sigmas")]
    LengthMismatch {
        times: usize,
        values: usize,
        sigmas: usize,
    },

    #[error("Too many observations for the search routine ({0})")]
    TooLarge(usize),

    #[error("Period search failed with status {0}")]
    Failed(i32),
}

/// Status code returned by the search routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdmStatus(pub i32);

impl PdmStatus {
    /// Convert a non-zero status into an error
    pub fn into_result(self) -> Result<(), PeriodError> {
        match self.0 {
            0 => Ok(()),
            code => Err(PeriodError::Failed(code)),
        }
    }
}

/// Observation times, values and per-point uncertainties of equal length
#[derive(Debug, Clone, Copy)]
pub struct ObservationSeries<'a> {
    times: &'a [f64],
    values: &'a [f64],
    sigmas: &'a [f64],
}

impl<'a> ObservationSeries<'a> {
    pub fn new(times: &'a [f64], values: &'a [f64], sigmas: &'a [f64]) -> Result<Self, PeriodError> {
        if times.len() != values.len() || times.len() != sigmas.len() {
            return Err(PeriodError::LengthMismatch {
                times: times.len(),
                values: values.len(),
                sigmas: sigmas.len(),
            });
        }
        if times.is_empty() {
            return Err(PeriodError::Empty);
        }
        if c_int::try_from(times.len()).is_err() {
            return Err(PeriodError::TooLarge(times.len()));
        }
        Ok(Self { times, values, sigmas })
    }

    /// Observation count as passed to `ne`
    pub fn count(&self) -> c_int {
        // Checked in `new`
        self.times.len() as c_int
    }

    pub fn times(&self) -> &'a [f64] {
        self.times
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn sigmas(&self) -> &'a [f64] {
        self.sigmas
    }
}

/// External period-search routine
pub trait PeriodSearch {
    /// Search an in-memory series (`pdm2`)
    fn search(&self, series: &ObservationSeries<'_>) -> PdmStatus;

    /// Search a data file, writing results under `base_directory` (`pdm2_2`)
    fn search_file(&self, file: &Path, base_directory: &Path) -> PdmStatus;
}
