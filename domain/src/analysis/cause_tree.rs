//! Cause tree entity - successive "why" answers for a problem.

use serde::{Deserialize, Serialize};

/// Maximum number of sub-causes recorded for any node.
pub const CAUSE_FAN_OUT: usize = 2;

/// A node in a cause tree (Entity)
///
/// A node without children is a leaf cause, either because expansion
/// reached the depth limit or because it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseNode {
    pub cause: String,
    pub children: Vec<CauseNode>,
}

impl CauseNode {
    /// Creates a node with no sub-causes.
    pub fn leaf(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with the given sub-causes, in order.
    pub fn with_children(cause: impl Into<String>, children: Vec<CauseNode>) -> Self {
        Self {
            cause: cause.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of edges on the longest root-to-leaf path (a leaf has depth 0).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Largest number of children held by any node in the tree.
    pub fn max_fan_out(&self) -> usize {
        self.children
            .iter()
            .map(CauseNode::max_fan_out)
            .fold(self.children.len(), usize::max)
    }

    /// Total number of nodes, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CauseNode::node_count).sum::<usize>()
    }

    /// Leaf causes in depth-first, left-to-right order.
    pub fn extract_leaves(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, out: &mut Vec<String>) {
        if self.is_leaf() {
            out.push(self.cause.clone());
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// The first `max` leaf causes (prefix truncation, not sampling).
    pub fn truncated_leaves(&self, max: usize) -> Vec<String> {
        let mut leaves = self.extract_leaves();
        leaves.truncate(max);
        leaves
    }
}
