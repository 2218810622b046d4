use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use shortest_paths::{
    config::{exit_status, FailurePolicy, OutputFormat, RunConfig, DEFAULT_INPUT},
    logging::init_tracing,
    run,
};
use tracing::error;

/// Prints the shortest path from the first to the last declared node of every
/// graph in `input`, one line per graph.
///
/// Exits with 1 if the input cannot be read or the output cannot be written,
/// and with 2 if at least one graph could not be solved.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one graph per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Write paths to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    /// Stop at the first graph that cannot be solved
    #[arg(long)]
    fail_fast: bool,
    /// Number of worker threads
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// Show a progress bar on stderr
    #[arg(short, long)]
    progress: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            input: args.input,
            output: args.output,
            format: args.format,
            failure_policy: if args.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::Isolate
            },
            threads: args.threads,
            progress: args.progress,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let config = RunConfig::from(Args::parse());

    let outcome = run(&config);
    if let Err(err) = &outcome {
        error!("{}", err);
    }
    ExitCode::from(exit_status(&outcome))
}
