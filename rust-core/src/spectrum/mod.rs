//! Frequency-domain transforms and bin ranking

pub mod fft;
pub mod analysis;

pub use fft::{ComplexFftEngine, RealFftEngine, TransformEngine};
pub use analysis::BinEnergy;
