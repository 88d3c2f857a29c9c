pub type NodeId = usize;
pub type EdgeId = usize;
pub type Weight = u32;

/// distance reported for unreachable destinations, never a legal arc weight
pub const UNREACHABLE: Weight = Weight::MAX;

pub type NodeIds = Vec<NodeId>;
pub type EdgeIds = Vec<EdgeId>;
pub type Weights = Vec<Weight>;
