use std::collections::VecDeque;

use crate::{graphs::VertexId, search::path::Path};

/// Per vertex state of a breadth-first search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BfsRecord {
    pub discovered: bool,
    pub predecessor: Option<VertexId>,
}

/// Records and FIFO queue of a single breadth-first search run.
pub struct BfsData {
    pub records: Vec<BfsRecord>,
    queue: VecDeque<VertexId>,
}

impl BfsData {
    /// Creates undiscovered records for `number_of_vertices` vertices and
    /// marks `source` as discovered. The source is not enqueued.
    pub fn new(number_of_vertices: usize, source: VertexId) -> Self {
        let mut records = vec![BfsRecord::default(); number_of_vertices];
        records[source as usize].discovered = true;

        BfsData {
            records,
            queue: VecDeque::new(),
        }
    }

    /// Discovers `vertex` from `predecessor` and enqueues it. Returns false if
    /// `vertex` was already discovered, in which case nothing changes.
    pub fn discover(&mut self, vertex: VertexId, predecessor: VertexId) -> bool {
        let record = &mut self.records[vertex as usize];
        if record.discovered {
            return false;
        }

        record.discovered = true;
        record.predecessor = Some(predecessor);
        self.queue.push_back(vertex);
        true
    }

    pub fn pop(&mut self) -> Option<VertexId> {
        self.queue.pop_front()
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.records[vertex as usize].predecessor
    }

    /// Constructs the path from `source` to `target` by following predecessor
    /// links backwards from `target`.
    ///
    /// Returns `None` if the chain ends before reaching `source`.
    pub fn get_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        let mut vertices = vec![target];

        let mut current = target;
        while current != source {
            current = self.get_predecessor(current)?;
            vertices.push(current);

            // predecessor chains are acyclic, this only guards corrupted records
            if vertices.len() > self.records.len() {
                return None;
            }
        }

        vertices.reverse();

        Some(Path { vertices })
    }
}

#[cfg(test)]
mod tests {
    use super::{BfsData, BfsRecord};

    #[test]
    fn source_is_discovered_but_not_queued() {
        let mut data = BfsData::new(3, 1);

        assert_eq!(
            data.records[1],
            BfsRecord {
                discovered: true,
                predecessor: None
            }
        );
        assert!(!data.records[0].discovered);
        assert_eq!(data.pop(), None);
    }

    #[test]
    fn discover_only_once() {
        let mut data = BfsData::new(3, 0);

        assert!(data.discover(1, 0));
        assert!(!data.discover(1, 2));
        assert!(!data.discover(0, 2));
        assert_eq!(data.get_predecessor(1), Some(0));
        assert_eq!(data.get_predecessor(0), None);
        assert_eq!(data.pop(), Some(1));
        assert_eq!(data.pop(), None);
    }

    #[test]
    fn path_follows_predecessors() {
        let mut data = BfsData::new(4, 0);
        data.discover(2, 0);
        data.discover(1, 2);
        data.discover(3, 1);

        assert_eq!(data.get_path(0, 3).unwrap().vertices, [0, 2, 1, 3]);
        assert_eq!(data.get_path(0, 0).unwrap().vertices, [0]);
    }

    #[test]
    fn no_path_to_undiscovered_vertex() {
        let mut data = BfsData::new(3, 0);
        data.discover(1, 0);

        assert_eq!(data.get_path(0, 2), None);
    }
}
