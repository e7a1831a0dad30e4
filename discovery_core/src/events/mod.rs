//! Game events - everything the presentation layer needs to redraw.
//!
//! The engine never renders. It queues these events on the session and the
//! host drains them after each player action.

use discovery_graph::{NodeId, Position};
use serde::{Deserialize, Serialize};

/// A change the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A node appeared on screen at a fixed position.
    NodeBecameVisible { node: NodeId, position: Position },

    /// A node was guessed (or given at the start); draw its real label.
    NodeFound { node: NodeId },

    /// Draw a line between two nodes. Fires once per unordered pair.
    ConnectionEstablished { a: NodeId, b: NodeId },

    /// The focused node changed, or its child list should be re-read.
    SelectionChanged { node: Option<NodeId> },
}

impl GameEvent {
    /// Get every node this event refers to.
    pub fn nodes(&self) -> Vec<NodeId> {
        match self {
            GameEvent::NodeBecameVisible { node, .. } | GameEvent::NodeFound { node } => {
                vec![*node]
            }
            GameEvent::ConnectionEstablished { a, b } => vec![*a, *b],
            GameEvent::SelectionChanged { node } => node.iter().copied().collect(),
        }
    }

    /// Short name of the event kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::NodeBecameVisible { .. } => "node_became_visible",
            GameEvent::NodeFound { .. } => "node_found",
            GameEvent::ConnectionEstablished { .. } => "connection_established",
            GameEvent::SelectionChanged { .. } => "selection_changed",
        }
    }
}
