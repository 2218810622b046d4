//! Error types for parsing graph lines, searching them and running a batch.

use std::path::PathBuf;

use crate::graphs::VertexId;

/// Errors raised while turning one input line into an [`AdjacencyGraph`].
///
/// [`AdjacencyGraph`]: crate::graphs::adjacency_graph::AdjacencyGraph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line is not valid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("invalid node count {0:?}")]
    InvalidNodeCount(String),

    #[error("graph declares no nodes")]
    NoNodes,

    #[error("node count is {expected} but only {found} node fields follow")]
    MissingNodes { expected: usize, found: usize },

    #[error("node {0:?} is declared more than once")]
    DuplicateNode(String),

    #[error("malformed edge {0:?}, expected <A>-<B>")]
    MalformedEdge(String),

    #[error("edge {edge:?} references undeclared node {node:?}")]
    UndeclaredNode { edge: String, node: String },
}

/// Errors raised by a path finder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no path from {first:?} to {last:?}")]
    PathNotFound { first: String, last: String },

    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),
}

/// Everything that can go wrong while solving a single line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

impl GraphError {
    pub fn kind(&self) -> &'static str {
        match self {
            GraphError::Parse(_) => "parse",
            GraphError::Search(_) => "search",
        }
    }
}

/// A [`GraphError`] together with the line it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: {source} (input: {line:?})")]
pub struct LineError {
    pub line_number: usize,
    pub line: String,
    pub source: GraphError,
}

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unable to read graphs from {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to write output: {0}")]
    WriteOutput(#[from] std::io::Error),

    #[error("unable to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unable to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
