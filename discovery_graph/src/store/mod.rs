//! Graph Store - the arena that owns every node and edge of a puzzle.
//!
//! Nodes live in a `Vec` and are addressed by [`NodeId`]. A lowercase label
//! index gives case-insensitive lookup, and edges are kept both as an ordered
//! list and in each endpoint's neighbor list.

mod edge;

pub use edge::*;

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::node::{normalize, Node, NodeId, NodeState};

/// The canonical set of nodes and edges.
#[derive(Debug, Clone, Serialize, Default)]
pub struct GraphStore {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node>,

    /// Index: normalized label -> node.
    by_label: HashMap<String, NodeId>,

    /// Edges in insertion order. Repeats are kept.
    edges: Vec<Edge>,
}

impl GraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, keyed by its lowercased label.
    pub fn add(&mut self, node: Node) -> GraphResult<NodeId> {
        let key = node.key();
        if self.by_label.contains_key(&key) {
            return Err(GraphError::DuplicateLabel {
                label: node.label().to_string(),
            });
        }

        let id = NodeId::from_index(self.nodes.len());
        self.by_label.insert(key, id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Look up a node by label, ignoring case.
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.id_of(label).and_then(|id| self.node(id))
    }

    /// Look up a node's ID by label, ignoring case.
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(&normalize(label)).copied()
    }

    /// Check if a label exists in the store.
    pub fn has(&self, label: &str) -> bool {
        self.by_label.contains_key(&normalize(label))
    }

    /// Get node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Connect two nodes with an undirected edge.
    ///
    /// Both neighbor lists grow by one entry. Connecting the same pair twice
    /// is allowed and stores the edge twice.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        if self.node(a).is_none() {
            return Err(GraphError::UnknownNode(a));
        }
        let Some(node_b) = self.node(b) else {
            return Err(GraphError::UnknownNode(b));
        };
        if a == b {
            return Err(GraphError::InvalidEdge {
                label: node_b.label().to_string(),
            });
        }

        self.nodes[a.index()].push_neighbor(b);
        self.nodes[b.index()].push_neighbor(a);
        self.edges.push(Edge::new(a, b));
        Ok(())
    }

    /// Connect two nodes by label.
    pub fn connect_labels(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let a_id = self.require(a)?;
        let b_id = self.require(b)?;
        self.connect(a_id, b_id)
    }

    /// Look up a label that must exist.
    pub fn require(&self, label: &str) -> GraphResult<NodeId> {
        self.id_of(label).ok_or_else(|| GraphError::UnknownLabel {
            label: label.to_string(),
        })
    }

    /// Neighbors of a node in edge order. Unknown IDs have no neighbors.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::neighbors).unwrap_or(&[])
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    /// Iterate over all nodes currently on screen.
    pub fn visible(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.iter().filter(|(_, node)| node.is_visible())
    }

    /// Get the IDs of all starting nodes.
    pub fn starting_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_starting_node())
            .map(|(id, _)| id)
            .collect()
    }

    /// Count nodes in a given state.
    pub fn count_in_state(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state() == state).count()
    }

    /// Get the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the store has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the total number of edges, repeats included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
