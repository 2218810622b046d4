use path::{Path, ShortestPathRequest};

use crate::error::SearchError;

pub mod bfs;
pub mod collections;
pub mod path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Path, SearchError>;
}
