use crate::error::{GraphError, Result};
use crate::graph_algorithms::{self, ShortestPath};
use crate::types::*;
use std::fmt;
use std::ops::Range;

use tracing::{debug, warn};

/// read only view of a directed graph, the shortest path search only needs this
pub trait Graph {

    fn node_ids(&self) -> Range<NodeId>;
    fn edge_ids(&self, node: NodeId) -> Range<EdgeId>;
    fn target_id(&self, node: NodeId, edge_id: EdgeId) -> NodeId;
    fn weight(&self, node: NodeId, edge_id: EdgeId) -> Weight;

    fn num_nodes(&self) -> usize {
        self.node_ids().len()
    }

    fn contains(&self, node: NodeId) -> bool {
        node < self.num_nodes()
    }
}

/// mutable directed graph that stores the outgoing arcs of every vertex as (head, weight) pairs.
///
/// Shrinking the vertex set only discards the outgoing arcs of the removed vertices.
/// Arcs of surviving vertices that point into the removed range stay in place and are
/// still counted by `num_arcs`.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {

    arcs: Vec<Vec<(NodeId, Weight)>>,
    num_arcs: usize,
}

impl AdjacencyList {

    pub fn new(num_vertices: usize) -> AdjacencyList {
        AdjacencyList {
            arcs: vec![Vec::new(); num_vertices],
            num_arcs: 0,
        }
    }

    /// grows the graph with vertices without arcs or drops the trailing vertices together with their outgoing arcs
    pub fn resize(&mut self, num_vertices: usize) {
        if num_vertices < self.arcs.len() {
            let removed_arcs: usize = self.arcs[num_vertices..].iter().map(|list| list.len()).sum();
            self.num_arcs -= removed_arcs;

            if tracing::enabled!(tracing::Level::WARN) {
                let dangling = self.arcs[..num_vertices].iter()
                    .flatten()
                    .filter(|(head, _)| *head >= num_vertices)
                    .count();

                if dangling > 0 {
                    warn!(num_vertices, dangling, "shrinking leaves arcs pointing to removed vertices");
                }
            }
        }

        debug!(from = self.arcs.len(), to = num_vertices, "resize graph");
        self.arcs.resize(num_vertices, Vec::new());
    }

    pub fn num_vertices(&self) -> usize {
        self.arcs.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        self.check_vertex(node)?;

        Ok(self.arcs[node].len())
    }

    /// copy of the outgoing arcs of the given vertex in insertion order
    pub fn arcs(&self, node: NodeId) -> Result<Vec<(NodeId, Weight)>> {
        self.check_vertex(node)?;

        Ok(self.arcs[node].to_vec())
    }

    /// appends the arc (origin, destination); parallel arcs are kept as separate entries
    pub fn add_arc(&mut self, origin: NodeId, destination: NodeId, weight: Weight) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;

        if weight == UNREACHABLE {
            return Err(GraphError::InvalidWeight);
        }

        self.arcs[origin].push((destination, weight));
        self.num_arcs += 1;

        debug!(origin, destination, weight, "add arc");
        Ok(())
    }

    /// removes one arc from origin to destination, the most recently added one if there are several
    pub fn remove_arc(&mut self, origin: NodeId, destination: NodeId) -> Result<()> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;

        let list = &mut self.arcs[origin];
        if list.is_empty() {
            return Err(GraphError::EmptyAdjacency { vertex: origin });
        }

        // scan from the back so the latest parallel arc goes first
        let position = list.iter()
            .rposition(|(head, _)| *head == destination)
            .ok_or(GraphError::ArcNotFound { origin, destination })?;

        list.remove(position);
        self.num_arcs -= 1;

        debug!(origin, destination, "remove arc");
        Ok(())
    }

    /// weight of the earliest added arc from origin to destination
    pub fn get_weight(&self, origin: NodeId, destination: NodeId) -> Result<Weight> {
        self.check_vertex(origin)?;

        self.arcs[origin].iter()
            .find(|(head, _)| *head == destination)
            .map(|(_, weight)| *weight)
            .ok_or(GraphError::ArcNotFound { origin, destination })
    }

    pub fn shortest_path(&self, origin: NodeId, destination: NodeId) -> Result<ShortestPath> {
        graph_algorithms::shortest_path(self, origin, destination)
    }

    /// freezes the current arcs into an adjacency array that can be shared between threads
    pub fn to_array(&self) -> GraphArray {
        let mut first_edge: EdgeIds = Vec::with_capacity(self.arcs.len() + 1);
        let mut target_node: NodeIds = Vec::with_capacity(self.num_arcs);
        let mut weights: Weights = Vec::with_capacity(self.num_arcs);

        for list in &self.arcs {
            first_edge.push(target_node.len());

            for (head, weight) in list {
                target_node.push(*head);
                weights.push(*weight);
            }
        }

        first_edge.push(target_node.len());

        GraphArray::new(first_edge, target_node, weights)
    }

    fn check_vertex(&self, vertex: NodeId) -> Result<()> {
        if vertex >= self.arcs.len() {
            return Err(GraphError::InvalidVertex { vertex, num_vertices: self.arcs.len() });
        }

        Ok(())
    }
}

impl Graph for AdjacencyList {

    fn node_ids(&self) -> Range<NodeId> {
        0..self.arcs.len()
    }

    fn edge_ids(&self, node: NodeId) -> Range<EdgeId> {
        0..self.arcs[node].len()
    }

    fn target_id(&self, node: NodeId, edge_id: EdgeId) -> NodeId {
        self.arcs[node][edge_id].0
    }

    fn weight(&self, node: NodeId, edge_id: EdgeId) -> Weight {
        self.arcs[node][edge_id].1
    }
}

impl fmt::Display for AdjacencyList {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (start_index, list) in self.arcs.iter().enumerate() {
            for (target, weight) in list {
                writeln!(f, "edge from {} to {} with weight: {}", start_index, target, weight)?;
            }
        }

        Ok(())
    }
}

/// immutable adjacency array snapshot, outgoing arcs of node i are stored at first_edge[i]..first_edge[i + 1]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphArray {

    first_edge: EdgeIds,
    target_node: NodeIds,
    weights: Weights,
}

impl GraphArray {

    fn new(first_edge: EdgeIds, target_node: NodeIds, weights: Weights) -> GraphArray {
        GraphArray {
            first_edge,
            target_node,
            weights,
        }
    }

    pub fn num_arcs(&self) -> usize {
        self.target_node.len()
    }

    pub fn arclist(&self, node: NodeId) -> Vec<(NodeId, Weight)> {
        self.edge_ids(node)
            .map(|edge_id| (self.target_node[edge_id], self.weights[edge_id]))
            .collect()
    }

    pub fn shortest_path(&self, origin: NodeId, destination: NodeId) -> Result<ShortestPath> {
        graph_algorithms::shortest_path(self, origin, destination)
    }
}

impl Graph for GraphArray {

    fn node_ids(&self) -> Range<NodeId> {
        0..(self.first_edge.len() - 1)
    }

    fn edge_ids(&self, node: NodeId) -> Range<EdgeId> {
        self.first_edge[node]..self.first_edge[node + 1]
    }

    fn target_id(&self, _node: NodeId, edge_id: EdgeId) -> NodeId {
        self.target_node[edge_id]
    }

    fn weight(&self, _node: NodeId, edge_id: EdgeId) -> Weight {
        self.weights[edge_id]
    }
}

impl From<&AdjacencyList> for GraphArray {

    fn from(graph: &AdjacencyList) -> GraphArray {
        graph.to_array()
    }
}
