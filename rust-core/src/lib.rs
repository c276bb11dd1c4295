//! Spectral Filter - Dominant-Frequency Signal Filtering
//! 
//! Keeps the strongest frequency component(s) of a real signal and rebuilds
//! the time-domain result, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod spectrum;
pub mod filters;
pub mod data;
pub mod period;
pub mod logging;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::FilterError;
pub use filters::{FilterConfig, Retention, RetainedSet, SpectralFilter};
pub use spectrum::{BinEnergy, ComplexFftEngine, RealFftEngine, TransformEngine};
