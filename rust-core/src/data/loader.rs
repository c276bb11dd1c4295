//! Plain-text signal files
//!
//! Input files hold one observation per line as three whitespace-separated
//! columns; the middle column is the sample value. Lines with any other
//! number of fields (headers, blanks, comments) are skipped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: cannot parse sample value '{token}'")]
    Parse { line: usize, token: String },
}

/// Extract samples from three-column text
pub fn parse_signal(text: &str) -> Result<Vec<f64>, LoadError> {
    let mut samples = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            continue;
        }

        let value = fields[1].parse::<f64>().map_err(|_| LoadError::Parse {
            line: line_idx + 1,
            token: fields[1].to_string(),
        })?;
        samples.push(value);
    }

    Ok(samples)
}

/// Read a signal file
pub fn load_signal(path: impl AsRef<Path>) -> Result<Vec<f64>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = parse_signal(&text)?;
    tracing::debug!(path = %path.display(), samples = samples.len(), "loaded signal");
    Ok(samples)
}

/// Write one sample per line
pub fn write_signal(path: impl AsRef<Path>, samples: &[f64]) -> Result<(), LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for sample in samples {
        writeln!(writer, "{}", sample).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "wrote signal");
    Ok(())
}
