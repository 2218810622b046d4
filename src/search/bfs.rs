use tracing::trace;

use super::{
    collections::bfs_data::BfsData,
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::SearchError,
    graphs::{Graph, VertexId},
};

/// Breadth-first search over an unweighted graph. Ties between equally short
/// paths are broken by neighbor order: the first predecessor to discover a
/// vertex wins.
pub struct BreadthFirstSearch<'a> {
    pub graph: &'a dyn Graph,
}

impl<'a> BreadthFirstSearch<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        BreadthFirstSearch { graph }
    }
}

impl<'a> PathFinding for BreadthFirstSearch<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Path, SearchError> {
        shortest_path(self.graph, request)
    }
}

fn shortest_path(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
) -> Result<Path, SearchError> {
    for vertex in [request.source(), request.target()] {
        if vertex >= graph.number_of_vertices() {
            return Err(SearchError::UnknownVertex(vertex));
        }
    }

    let data = get_data(graph, request.source(), request.target())
        .ok_or_else(|| path_not_found(graph, request))?;

    data.get_path(request.source(), request.target())
        .ok_or_else(|| path_not_found(graph, request))
}

/// Runs the search until `target` becomes the current vertex. Returns `None`
/// if the queue runs dry first. Both vertices must be part of `graph`.
fn get_data(graph: &dyn Graph, source: VertexId, target: VertexId) -> Option<BfsData> {
    let mut data = BfsData::new(graph.number_of_vertices() as usize, source);

    let mut current = source;
    while current != target {
        for neighbor in graph.neighbors(current) {
            if data.discover(neighbor, current) {
                trace!(vertex = neighbor, predecessor = current, "discovered");
            }
        }
        current = data.pop()?;
    }

    Some(data)
}

fn path_not_found(graph: &dyn Graph, request: &ShortestPathRequest) -> SearchError {
    let label = |vertex: VertexId| graph.label(vertex).unwrap_or_default().to_string();
    SearchError::PathNotFound {
        first: label(request.source()),
        last: label(request.target()),
    }
}
