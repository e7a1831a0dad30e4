//! Selection - the single focused node and the child list shown for it.

use discovery_graph::{NodeId, NodeState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::session::GameSession;

/// A visible neighbor of the focused node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildEntry {
    pub node: NodeId,
    /// Label if found, placeholder otherwise.
    pub text: String,
    pub found: bool,
}

/// What the side panel shows for the focused node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    pub node: NodeId,
    pub text: String,
    pub title: String,
    pub state: NodeState,
    /// Visible neighbors in edge order, each listed once.
    pub children: Vec<ChildEntry>,
}

impl SelectionView {
    /// Build the view for a node. Hidden neighbors are left out.
    pub fn build(session: &GameSession, id: NodeId) -> Option<Self> {
        let store = session.store();
        let node = store.node(id)?;

        let mut seen = HashSet::new();
        let children = node
            .neighbors()
            .iter()
            .filter(|n| seen.insert(**n))
            .filter_map(|n| store.node(*n).map(|child| (*n, child)))
            .filter(|(_, child)| child.is_visible())
            .map(|(n, child)| ChildEntry {
                node: n,
                text: child.display_text(),
                found: child.is_found(),
            })
            .collect();

        Some(Self {
            node: id,
            text: node.display_text(),
            title: node.title(),
            state: node.state(),
            children,
        })
    }
}
