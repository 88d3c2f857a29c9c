use crate::error::{GraphError, Result};
use crate::graph_representation::Graph;
use crate::types::*;
use crate::utils::binary_heap::MinBinaryHeap;

use tracing::{debug, trace};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub struct DijkstraState {
    pub distance: Weight,
    pub node_id: NodeId,
}

/// result of a single pair query. an unreachable destination has distance UNREACHABLE and the path [destination]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    pub distance: Weight,
    pub path: NodeIds,
}

impl ShortestPath {

    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

/// dijkstra's algorithm from origin to destination with lazy deletion of outdated queue entries.
/// the search stops as soon as the destination is popped from the queue
pub fn shortest_path(graph: &impl Graph, origin: NodeId, destination: NodeId) -> Result<ShortestPath> {
    let num_nodes = graph.num_nodes();

    for vertex in [origin, destination] {
        if !graph.contains(vertex) {
            return Err(GraphError::InvalidVertex { vertex, num_vertices: num_nodes });
        }
    }

    if origin == destination {
        return Ok(ShortestPath {distance: 0, path: vec![destination]});
    }

    let mut to_visit: MinBinaryHeap<DijkstraState> = MinBinaryHeap::with_capacity(num_nodes);
    let mut distance_table: Weights = vec![UNREACHABLE; num_nodes];
    let mut visited: Vec<bool> = vec![false; num_nodes];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; num_nodes];

    distance_table[origin] = 0;
    to_visit.insert(DijkstraState {distance: 0, node_id: origin});

    while let Some(DijkstraState {distance: _, node_id: current_node}) = to_visit.pop() {
        if current_node == destination {
            break;
        }

        // outdated entry of an already settled node
        if visited[current_node] {
            continue;
        }

        visited[current_node] = true;
        let current_distance = distance_table[current_node];
        trace!(node = current_node, distance = current_distance, "settle");

        for edge_id in graph.edge_ids(current_node) {
            let target_node = graph.target_id(current_node, edge_id);

            // arcs into vertices removed by a shrink are skipped
            if !graph.contains(target_node) || visited[target_node] {
                continue;
            }

            let new_distance = current_distance.saturating_add(graph.weight(current_node, edge_id));

            if new_distance < distance_table[target_node] {
                distance_table[target_node] = new_distance;
                predecessors[target_node] = Some(current_node);

                to_visit.insert(DijkstraState {distance: new_distance, node_id: target_node});
            }
        }
    }

    if predecessors[destination].is_none() {
        debug!(origin, destination, "destination is unreachable");
        return Ok(ShortestPath {distance: UNREACHABLE, path: vec![destination]});
    }

    let path = unwind_predecessors(&predecessors, destination);
    let distance = distance_table[destination];
    debug!(origin, destination, distance, hops = path.len() - 1, "shortest path found");

    Ok(ShortestPath {distance, path})
}

/// walks the predecessor chain back from the given node and returns it origin first
fn unwind_predecessors(predecessors: &[Option<NodeId>], last: NodeId) -> NodeIds {
    let mut stack: NodeIds = vec![last];
    let mut current_node = last;

    while let Some(predecessor) = predecessors[current_node] {
        stack.push(predecessor);
        current_node = predecessor;
    }

    let mut path = NodeIds::with_capacity(stack.len());
    while let Some(node) = stack.pop() {
        path.push(node);
    }

    path
}
