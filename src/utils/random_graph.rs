use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::graph_representation::AdjacencyList;
use crate::types::*;

/// creates a graph with num_arcs uniformly distributed arcs whose weights lie in 0..=max_weight.
/// self loops and parallel arcs may occur. max_weight is capped below UNREACHABLE
pub fn random_graph<R: Rng>(num_vertices: usize, num_arcs: usize, max_weight: Weight, rng: &mut R) -> Result<AdjacencyList> {
    let mut graph = AdjacencyList::new(num_vertices);

    if num_vertices == 0 {
        return Ok(graph);
    }

    let max_weight = max_weight.min(UNREACHABLE - 1);

    for _ in 0..num_arcs {
        let origin: NodeId = rng.gen_range(0..num_vertices);
        let destination: NodeId = rng.gen_range(0..num_vertices);
        let weight: Weight = rng.gen_range(0..=max_weight);

        graph.add_arc(origin, destination, weight)?;
    }

    debug!(num_vertices, num_arcs = graph.num_arcs(), "random graph created");
    Ok(graph)
}
