//! Solving a batch of graph lines.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use tracing::{debug, error};

use crate::{
    config::{FailurePolicy, OutputFormat},
    error::{AppError, GraphError, LineError, ParseError, SearchError},
    graphs::graph_parser,
    search::{
        bfs::BreadthFirstSearch,
        path::{LabeledPath, ShortestPathRequest},
        PathFinding,
    },
    utility::get_progressbar,
};

/// The shortest path found for one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolvedLine {
    #[serde(rename = "line")]
    pub line_number: usize,
    pub path: LabeledPath,
    pub hops: u32,
}

pub type LineResult = Result<SolvedLine, LineError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    /// Lines left unreported because an earlier line failed under
    /// [`FailurePolicy::FailFast`].
    pub skipped: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Parses `line` and finds the shortest path from its first to its last node.
pub fn solve_line(line: &str) -> Result<LabeledPath, GraphError> {
    let graph = graph_parser::parse(line)?;
    let request =
        ShortestPathRequest::first_to_last(&graph).ok_or(SearchError::UnknownVertex(0))?;
    let path = BreadthFirstSearch::new(&graph).shortest_path(&request)?;
    Ok(path.labeled(&graph)?)
}

fn solve_numbered(line_number: usize, bytes: &[u8]) -> LineResult {
    let result = std::str::from_utf8(bytes)
        .map_err(|err| {
            GraphError::from(ParseError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            })
        })
        .and_then(solve_line);

    match result {
        Ok(path) => {
            debug!(line_number, hops = path.hops(), "solved");
            Ok(SolvedLine {
                line_number,
                hops: path.hops(),
                path,
            })
        }
        Err(source) => Err(LineError {
            line_number,
            line: String::from_utf8_lossy(bytes).into_owned(),
            source,
        }),
    }
}

/// Solves every non-blank line in parallel. Results keep the input order and
/// carry 1-based line numbers.
///
/// Lines are decoded one by one, so a line that is not valid UTF-8 fails on
/// its own without affecting the others.
pub fn solve_lines<L: AsRef<[u8]> + Sync>(lines: &[L], progress: bool) -> Vec<LineResult> {
    let numbered = lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_ref()))
        .filter(|(line_number, line)| {
            let blank = line.iter().all(u8::is_ascii_whitespace);
            if blank {
                debug!(line_number, "skipping blank line");
            }
            !blank
        })
        .collect_vec();

    let results = numbered
        .par_iter()
        .map(|&(line_number, line)| solve_numbered(line_number, line));

    if progress {
        let bar = get_progressbar("Solving graphs", numbered.len() as u64);
        let results = results.progress_with(bar.clone()).collect();
        bar.finish_and_clear();
        results
    } else {
        results.collect()
    }
}

/// Reads the raw lines of `path`, without their `\n`. Decoding is left to
/// [`solve_lines`].
pub fn read_lines(path: &Path) -> Result<Vec<Vec<u8>>, AppError> {
    let read_error = |source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_error)?);
    reader.split(b'\n').collect::<Result<_, _>>().map_err(read_error)
}

/// Writes the solved lines to `writer` and reports every failed line.
///
/// With [`FailurePolicy::FailFast`] nothing after the first failure is
/// written.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &[LineResult],
    format: OutputFormat,
    policy: FailurePolicy,
) -> Result<Summary, AppError> {
    let mut summary = Summary::default();

    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(solved) => {
                match format {
                    OutputFormat::Plain => writeln!(writer, "{}", solved.path)?,
                    OutputFormat::Json => {
                        serde_json::to_writer(&mut *writer, solved)?;
                        writeln!(writer)?;
                    }
                }
                summary.solved += 1;
            }
            Err(line_error) => {
                error!(kind = line_error.source.kind(), "{}", line_error);
                summary.failed += 1;

                if policy == FailurePolicy::FailFast {
                    summary.skipped = results.len() - index - 1;
                    break;
                }
            }
        }
    }

    Ok(summary)
}
