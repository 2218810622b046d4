use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use indicatif::ProgressIterator;
use rand::random;
use shortest_paths::{graphs::generator::random_connected_graph_lines, logging::init_tracing};
use tracing::{error, info};

/// Generates `number_of_graphs` random connected graphs in the one-line input
/// format. The same seed always yields the same file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the graphs will be saved
    #[arg(short, long)]
    output: PathBuf,
    /// Number of graphs to be generated
    #[arg(short, long, default_value = "100")]
    number_of_graphs: u32,
    /// Nodes per graph
    #[arg(long, default_value = "16")]
    nodes: u32,
    /// Edges added on top of a random spanning tree
    #[arg(long, default_value = "8")]
    extra_edges: u32,
    /// Seed, random if not set
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(random);
    info!(seed, "generating graphs");
    let lines =
        random_connected_graph_lines(seed, args.number_of_graphs, args.nodes, args.extra_edges);

    match write_lines(&args.output, &lines) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(output = %args.output.display(), "unable to write graphs: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn write_lines(path: &PathBuf, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines.iter().progress() {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
