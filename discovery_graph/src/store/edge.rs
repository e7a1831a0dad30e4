//! Edge definitions - undirected links between two nodes.

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// An undirected edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// The endpoints ordered low-to-high, so `(a, b)` and `(b, a)` compare equal.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Check if this edge touches a node.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Get the endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}
