use crate::types::NodeId;

/// precondition violations reported by the graph operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} does not exist (graph has {num_vertices} vertices)")]
    InvalidVertex { vertex: NodeId, num_vertices: usize },

    #[error("forbidden arc weight, the maximum weight value is reserved for unreachable")]
    InvalidWeight,

    #[error("vertex {vertex} has no outgoing arcs")]
    EmptyAdjacency { vertex: NodeId },

    #[error("no arc from {origin} to {destination}")]
    ArcNotFound { origin: NodeId, destination: NodeId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
