//! Drawn connections, tracked as unordered node pairs.

use discovery_graph::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of node pairs that already have a line on screen.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConnectionSet {
    pairs: HashSet<(NodeId, NodeId)>,
}

impl ConnectionSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a connection. Returns `true` only the first time a pair is seen,
    /// in either order.
    pub fn insert(&mut self, a: NodeId, b: NodeId) -> bool {
        self.pairs.insert(Edge::new(a, b).key())
    }

    /// Check if two nodes are already connected on screen.
    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        self.pairs.contains(&Edge::new(a, b).key())
    }

    /// Iterate over the drawn pairs, lower ID first.
    pub fn iter(&self) -> impl Iterator<Item = &(NodeId, NodeId)> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
