//! Signal file input/output

pub mod loader;

pub use loader::{load_signal, parse_signal, write_signal, LoadError};
