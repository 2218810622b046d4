use ahash::{HashMap, HashMapExt};

use super::{edge::UndirectedEdge, Graph, VertexId};
use crate::error::ParseError;

/// Undirected, unweighted graph whose vertices carry string labels.
///
/// Labels are interned in declaration order; `neighbors[v]` lists the
/// neighbors of `v` in the order their edges were added.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    labels: Vec<String>,
    index: HashMap<String, VertexId>,
    neighbors: Vec<Vec<VertexId>>,
}

impl AdjacencyGraph {
    pub fn with_capacity(number_of_vertices: usize) -> Self {
        AdjacencyGraph {
            labels: Vec::with_capacity(number_of_vertices),
            index: HashMap::with_capacity(number_of_vertices),
            neighbors: Vec::with_capacity(number_of_vertices),
        }
    }

    /// Declares a new vertex with an empty neighbor list.
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId, ParseError> {
        if self.index.contains_key(label) {
            return Err(ParseError::DuplicateNode(label.to_string()));
        }

        let vertex = self.labels.len() as VertexId;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), vertex);
        self.neighbors.push(Vec::new());
        Ok(vertex)
    }

    /// Adds `edge` in both directions. Both endpoints must already be declared.
    pub fn add_edge(&mut self, edge: &UndirectedEdge) -> Result<(), ParseError> {
        let a = self.resolve(edge, edge.a())?;
        let b = self.resolve(edge, edge.b())?;

        self.neighbors[a as usize].push(b);
        self.neighbors[b as usize].push(a);
        Ok(())
    }

    fn resolve(&self, edge: &UndirectedEdge, label: &str) -> Result<VertexId, ParseError> {
        self.vertex(label)
            .ok_or_else(|| ParseError::UndeclaredNode {
                edge: format!("{}-{}", edge.a(), edge.b()),
                node: label.to_string(),
            })
    }

    pub fn vertex(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn neighbor_labels(&self, label: &str) -> Option<Vec<&str>> {
        let vertex = self.vertex(label)?;
        Some(
            self.neighbors[vertex as usize]
                .iter()
                .map(|&neighbor| self.labels[neighbor as usize].as_str())
                .collect(),
        )
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.labels.len() as u32
    }

    fn number_of_neighbor_entries(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    fn neighbors(&self, vertex: VertexId) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        match self.neighbors.get(vertex as usize) {
            Some(neighbors) => Box::new(neighbors.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex as usize).map(String::as_str)
    }
}
