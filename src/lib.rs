pub mod batch;
pub mod config;
pub mod error;
pub mod graphs;
pub mod logging;
pub mod search;
pub mod utility;

pub use batch::solve_line;
pub use config::{run, RunConfig};
