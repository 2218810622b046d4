use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::ValueEnum;
use rayon::ThreadPoolBuilder;
use tracing::info;

use crate::{
    batch::{read_lines, solve_lines, write_results, LineResult, Summary},
    error::AppError,
};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "graphs.in";

/// Every line was solved.
pub const EXIT_SUCCESS: u8 = 0;
/// The run could not complete: unreadable input, unwritable output, or no
/// thread pool.
pub const EXIT_FATAL: u8 = 1;
/// The run completed but at least one line could not be solved.
pub const EXIT_LINE_FAILED: u8 = 2;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Node labels joined by `-`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report a failing line and keep going
    #[default]
    Isolate,
    /// Stop at the first failing line
    FailFast,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Results go to stdout if unset.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub failure_policy: FailurePolicy,
    /// Size of a dedicated thread pool. Uses rayon's global pool if unset.
    pub threads: Option<usize>,
    pub progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            format: OutputFormat::default(),
            failure_policy: FailurePolicy::default(),
            threads: None,
            progress: false,
        }
    }
}

/// Reads every graph from `config.input`, solves them and writes the paths in
/// input order.
pub fn run(config: &RunConfig) -> Result<Summary, AppError> {
    info!(input = %config.input.display(), "reading graphs");
    let lines = read_lines(&config.input)?;

    let results = match config.threads {
        Some(threads) => ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(|| solve_lines(&lines, config.progress)),
        None => solve_lines(&lines, config.progress),
    };

    let summary = match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_all(BufWriter::new(file), &results, config)?
        }
        None => write_all(io::stdout().lock(), &results, config)?,
    };

    info!(
        solved = summary.solved,
        failed = summary.failed,
        skipped = summary.skipped,
        "finished"
    );
    Ok(summary)
}

fn write_all<W: Write>(
    mut writer: W,
    results: &[LineResult],
    config: &RunConfig,
) -> Result<Summary, AppError> {
    let summary = write_results(&mut writer, results, config.format, config.failure_policy)?;
    writer.flush()?;
    Ok(summary)
}

/// Process exit status for the outcome of [`run`].
pub fn exit_status(outcome: &Result<Summary, AppError>) -> u8 {
    match outcome {
        Ok(summary) if summary.is_success() => EXIT_SUCCESS,
        Ok(_) => EXIT_LINE_FAILED,
        Err(_) => EXIT_FATAL,
    }
}
