//! Dominant-frequency filtering

pub mod mask;
pub mod dominant;

pub use mask::RetainedSet;
pub use dominant::{FilterConfig, Retention, SpectralFilter};
