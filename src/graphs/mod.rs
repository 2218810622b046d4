pub mod adjacency_graph;
pub mod edge;
pub mod generator;
pub mod graph_functions;
pub mod graph_parser;

/// Dense index of a node. Nodes are numbered in declaration order, so the
/// first declared node is `0` and the last one is `number_of_vertices() - 1`.
pub type VertexId = u32;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Total number of entries over all neighbor lists. Every undirected edge
    /// contributes two entries.
    fn number_of_neighbor_entries(&self) -> usize {
        (0..self.number_of_vertices())
            .map(|vertex| self.neighbors(vertex).len())
            .sum()
    }

    /// Neighbors of `vertex` in the order their edges were declared.
    fn neighbors(&self, vertex: VertexId) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_>;

    fn label(&self, vertex: VertexId) -> Option<&str>;

    fn has_edge(&self, tail: VertexId, head: VertexId) -> bool {
        tail < self.number_of_vertices() && self.neighbors(tail).any(|vertex| vertex == head)
    }
}
