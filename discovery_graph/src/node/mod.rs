//! Node definitions - the discoverable entries of the word web.

mod label;

pub use label::*;

use serde::{Deserialize, Serialize};

/// Stable index of a node inside its graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a node ID from an arena index.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the arena index of this node.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point on the play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Discovery state of a node, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    /// Not on screen.
    Hidden,
    /// On screen as a placeholder, waiting to be guessed.
    Teased,
    /// Guessed correctly (or given at the start).
    Found,
}

/// A node in the word web.
///
/// The `found` and `visible` flags only ever move from `false` to `true`, and
/// `found` implies `visible`. The setters below are the only way to change
/// them, so those rules hold for every caller.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    label: String,
    found: bool,
    visible: bool,
    is_starting_node: bool,
    is_parent_category: bool,
    position: Option<Position>,
    neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a new hidden node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            found: false,
            visible: false,
            is_starting_node: false,
            is_parent_category: false,
            position: None,
            neighbors: Vec::new(),
        }
    }

    /// Create a starting node: found, visible and drawn as a parent category.
    pub fn starting(label: impl Into<String>) -> Self {
        Self::new(label).with_starting(true)
    }

    /// Mark this node as a starting node.
    ///
    /// Starting nodes are found and visible from the beginning and are also
    /// parent categories.
    pub fn with_starting(mut self, starting: bool) -> Self {
        if starting {
            self.is_starting_node = true;
            self.is_parent_category = true;
            self.visible = true;
            self.found = true;
        }
        self
    }

    /// Mark this node as a parent category.
    pub fn with_parent_category(mut self, parent: bool) -> Self {
        self.is_parent_category = self.is_parent_category || parent;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The lookup key of this node.
    pub fn key(&self) -> String {
        normalize(&self.label)
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_starting_node(&self) -> bool {
        self.is_starting_node
    }

    pub fn is_parent_category(&self) -> bool {
        self.is_parent_category
    }

    /// Position on the play area, if the node has been placed.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Neighbors in the order their edges were added. May contain repeats.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Get the discovery state of this node.
    pub fn state(&self) -> NodeState {
        match (self.visible, self.found) {
            (false, _) => NodeState::Hidden,
            (true, false) => NodeState::Teased,
            (true, true) => NodeState::Found,
        }
    }

    /// Placeholder text for this node.
    pub fn placeholder(&self) -> String {
        placeholder(&self.label)
    }

    /// Word-length hint for this node.
    pub fn title(&self) -> String {
        title_hint(&self.label)
    }

    /// Text to render: the label once found, the placeholder before that.
    pub fn display_text(&self) -> String {
        if self.found {
            self.label.clone()
        } else {
            self.placeholder()
        }
    }

    /// Number of characters the node renders, used for sizing.
    pub fn display_len(&self) -> usize {
        self.label.chars().count()
    }

    /// Make the node visible. Returns `true` if it was hidden before.
    pub fn mark_visible(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Mark the node as found, making it visible as well.
    ///
    /// Returns `true` if it was not found before.
    pub fn mark_found(&mut self) -> bool {
        let changed = !self.found;
        self.visible = true;
        self.found = true;
        changed
    }

    /// Fix the node's position. A placed node keeps its first position, so
    /// this returns `false` and does nothing if one is already set.
    pub fn place(&mut self, position: Position) -> bool {
        if self.position.is_some() {
            return false;
        }
        self.position = Some(position);
        true
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: NodeId) {
        self.neighbors.push(neighbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_hidden() {
        let node = Node::new("Cocoa");
        assert_eq!(node.label(), "Cocoa");
        assert_eq!(node.state(), NodeState::Hidden);
        assert!(node.position().is_none());
        assert!(node.neighbors().is_empty());
    }

    #[test]
    fn test_starting_node_is_found() {
        let node = Node::starting("Coco");
        assert!(node.is_starting_node());
        assert!(node.is_parent_category());
        assert!(node.is_visible());
        assert!(node.is_found());
        assert_eq!(node.state(), NodeState::Found);
    }

    #[test]
    fn test_found_implies_visible() {
        let mut node = Node::new("Chanel");
        assert!(node.mark_found());
        assert!(node.is_visible());
        assert!(!node.mark_found());
        assert!(!node.mark_visible());
    }

    #[test]
    fn test_state_transitions() {
        let mut node = Node::new("Chanel");
        node.mark_visible();
        assert_eq!(node.state(), NodeState::Teased);
        node.mark_found();
        assert_eq!(node.state(), NodeState::Found);
    }

    #[test]
    fn test_display_text_switches_on_found() {
        let mut node = Node::new("No. 5");
        node.mark_visible();
        assert_eq!(node.display_text(), "●●. ●");
        node.mark_found();
        assert_eq!(node.display_text(), "No. 5");
        assert_eq!(node.title(), "3 1");
    }

    #[test]
    fn test_position_is_fixed_once_placed() {
        let mut node = Node::new("Cocoa");
        assert!(node.place(Position::new(10.0, 20.0)));
        assert!(!node.place(Position::new(99.0, 99.0)));
        assert_eq!(node.position(), Some(Position::new(10.0, 20.0)));
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
    }
}
