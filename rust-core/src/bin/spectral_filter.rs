use clap::{Parser, ValueEnum};
use spectral_filter::data::{load_signal, write_signal, LoadError};
use spectral_filter::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use spectral_filter::spectrum::fft::bin_to_frequency;
use spectral_filter::{
    ComplexFftEngine, FilterConfig, FilterError, RealFftEngine, Retention, SpectralFilter,
    TransformEngine,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use thiserror::Error;

/// Keep the dominant frequency component(s) of a signal file
#[derive(Parser)]
#[command(name = "spectral-filter", version, about)]
struct Cli {
    /// Three-column text file; the middle column holds the samples
    input: PathBuf,

    /// Output file, one sample per line
    output: PathBuf,

    /// Number of strongest components to keep (default: single peak)
    #[arg(long, allow_negative_numbers = true)]
    keep: Option<i64>,

    /// Write the signal minus the kept components instead
    #[arg(long, default_value_t = false)]
    residual: bool,

    /// Transform engine
    #[arg(long, value_enum, default_value_t = Engine::Real)]
    engine: Engine,

    /// Print the N strongest bins before filtering
    #[arg(long)]
    rank: Option<usize>,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Log output format: compact or pretty
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,

    /// Debug-level pretty logging with source locations
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        if self.verbose {
            return LogConfig::development();
        }
        LogConfig {
            level: self.log_level,
            format: self.log_format,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Engine {
    /// realfft half-spectrum transforms
    Real,
    /// Full-length rustfft complex transforms
    Complex,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli.log_config());

    let config = FilterConfig {
        retention: cli.keep.map_or(Retention::SinglePeak, Retention::from_signed),
    };

    let result = match cli.engine {
        Engine::Real => run(&cli, SpectralFilter::with_engine(config, RealFftEngine)),
        Engine::Complex => run(&cli, SpectralFilter::with_engine(config, ComplexFftEngine)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<E: TransformEngine>(cli: &Cli, filter: SpectralFilter<E>) -> Result<(), CliError> {
    let signal = load_signal(&cli.input)?;
    if signal.is_empty() {
        tracing::warn!(path = %cli.input.display(), "no three-column rows found");
    }

    if let Some(count) = cli.rank {
        let ranking = filter.ranking(&signal)?;
        println!("{:>8}  {:>10}  {:>16}", "bin", "freq (π)", "magnitude");
        for energy in ranking.iter().take(count) {
            println!(
                "{:>8}  {:>10.5}  {:>16.6}",
                energy.index,
                bin_to_frequency(energy.index, signal.len()),
                energy.magnitude
            );
        }
    }

    let start = Instant::now();
    let output = if cli.residual {
        filter.residual(&signal)?
    } else {
        filter.process(&signal)?
    };
    tracing::info!(
        samples = signal.len(),
        retention = ?filter.config().retention,
        residual = cli.residual,
        elapsed = ?start.elapsed(),
        "filtered signal"
    );

    write_signal(&cli.output, &output)?;
    tracing::info!(path = %cli.output.display(), "wrote output");
    Ok(())
}
