extern crate rand;
extern crate thiserror;
extern crate tracing;

pub mod types;
pub mod error;

pub mod graph_representation;
pub mod graph_algorithms;
pub mod utils;

pub use error::{GraphError, Result};
pub use graph_algorithms::{shortest_path, ShortestPath};
pub use graph_representation::{AdjacencyList, Graph, GraphArray};
