/// Index of a node in the tree arena.
pub type NodeId = usize;

/// A node of a fitted tree. Children are stored in the same arena, always at
/// higher indices than their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf {
        class: usize,
    },
    Internal {
        feature: usize,
        threshold: f64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
