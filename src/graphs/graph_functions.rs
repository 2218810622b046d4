use std::collections::VecDeque;

use super::{Graph, VertexId};

/// Returns true if `path` is non-empty and every pair of consecutive vertices
/// is connected by an edge.
pub fn path_is_valid(graph: &dyn Graph, path: &[VertexId]) -> bool {
    if path.is_empty()
        || path
            .iter()
            .any(|&vertex| vertex >= graph.number_of_vertices())
    {
        return false;
    }

    path.windows(2)
        .all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// Number of edges on a shortest path from `source` to every vertex, or `None`
/// for vertices that cannot be reached.
pub fn hop_distances(graph: &dyn Graph, source: VertexId) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.number_of_vertices() as usize];
    if source >= graph.number_of_vertices() {
        return distances;
    }

    let mut queue = VecDeque::from([source]);
    distances[source as usize] = Some(0);

    while let Some(tail) = queue.pop_front() {
        let distance = distances[tail as usize].unwrap_or_default() + 1;
        for head in graph.neighbors(tail) {
            if distances[head as usize].is_none() {
                distances[head as usize] = Some(distance);
                queue.push_back(head);
            }
        }
    }

    distances
}
