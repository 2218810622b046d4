use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::SearchError,
    graphs::{Graph, VertexId},
};

/// Represents a request for finding a shortest path in a graph.
///
/// Unlike a general path request, `source == target` is allowed and yields
/// the single vertex path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestPathRequest {
    source: VertexId,
    target: VertexId,
}

impl ShortestPathRequest {
    pub fn new(source: VertexId, target: VertexId) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    /// From the first declared vertex to the last one, `None` for an empty
    /// graph.
    pub fn first_to_last(graph: &dyn Graph) -> Option<ShortestPathRequest> {
        let last = graph.number_of_vertices().checked_sub(1)?;
        Some(ShortestPathRequest::new(0, last))
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form the path, starting at the
/// source of the request and ending at its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
}

impl Path {
    /// Number of edges on the path.
    pub fn hops(&self) -> u32 {
        self.vertices.len().saturating_sub(1) as u32
    }

    /// Resolves every vertex to its label.
    pub fn labeled(&self, graph: &dyn Graph) -> Result<LabeledPath, SearchError> {
        let nodes = self
            .vertices
            .iter()
            .map(|&vertex| {
                graph
                    .label(vertex)
                    .map(str::to_string)
                    .ok_or(SearchError::UnknownVertex(vertex))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LabeledPath { nodes })
    }
}

/// A path expressed in node labels, rendered as `A-B-C`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabeledPath {
    pub nodes: Vec<String>,
}

impl LabeledPath {
    pub fn hops(&self) -> u32 {
        self.nodes.len().saturating_sub(1) as u32
    }
}

impl std::fmt::Display for LabeledPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join("-"))
    }
}
