mod settlement;
mod tree_node;

pub use settlement::Settlement;
pub use tree_node::{NodeId, NodeState, TreeNode};
