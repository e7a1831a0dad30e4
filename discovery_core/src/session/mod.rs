//! Game sessions - the explicit context every engine call works on.
//!
//! A session owns the graph store, the placer, the drawn connections, the
//! current selection, the guess log and the queue of events waiting for the
//! presentation layer.

mod connections;
mod history;

pub use connections::*;
pub use history::*;

use discovery_graph::{GraphDefinition, GraphStore, Node, NodeId, NodeState};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::placement::Placer;
use crate::reveal::RevealEngine;

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discovery progress for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub found: usize,
    pub visible: usize,
    pub total: usize,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} found", self.found, self.total)
    }
}

/// All mutable state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    pub(crate) store: GraphStore,
    pub(crate) placer: Placer,
    pub(crate) connections: ConnectionSet,
    pub(crate) selection: Option<NodeId>,
    pub(crate) history: GuessLog,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a game on a built store.
    ///
    /// Starting nodes are placed first, then their neighbors are teased and
    /// connected, exactly as if each starting node had just been guessed. The
    /// resulting events are queued.
    ///
    /// A store built by hand must not place hidden nodes or show non-starting
    /// nodes without a position.
    pub fn start(store: GraphStore, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        check_layout(&store)?;

        let mut session = Self {
            id: SessionId::new(),
            store,
            placer: Placer::new(config.placement.clone()),
            connections: ConnectionSet::new(),
            selection: None,
            history: GuessLog::new(config.history_len),
            events: Vec::new(),
        };

        let starting = RevealEngine::new().expose_starting_nodes(&mut session);
        info!(
            session = %session.id,
            nodes = session.store.len(),
            edges = session.store.edge_count(),
            starting,
            visible = session.progress().visible,
            "session started"
        );

        Ok(session)
    }

    /// Build the store from a definition and start a game on it.
    pub fn from_definition(
        definition: &GraphDefinition,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let store = definition.build()?;
        Self::start(store, config)
    }

    /// Parse a JSON definition and start a game on it.
    pub fn from_json(json: &str, config: &GameConfig) -> Result<Self, GameError> {
        let definition = GraphDefinition::from_json_str(json)?;
        Self::from_definition(&definition, config)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Read-only view of the graph.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Get node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.store.node(id)
    }

    /// Look up a node by label, ignoring case.
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.store.get(label)
    }

    pub fn placer(&self) -> &Placer {
        &self.placer
    }

    /// Connections already drawn.
    pub fn connections(&self) -> &ConnectionSet {
        &self.connections
    }

    /// The focused node, if any.
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Recent guesses, newest first.
    pub fn history(&self) -> &GuessLog {
        &self.history
    }

    /// Events queued since the last drain.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every queued event, in the order they were raised.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count found and visible nodes.
    pub fn progress(&self) -> Progress {
        let found = self.store.count_in_state(NodeState::Found);
        Progress {
            found,
            visible: found + self.store.count_in_state(NodeState::Teased),
            total: self.store.len(),
        }
    }

    /// Check if every node has been found.
    pub fn is_complete(&self) -> bool {
        self.store.iter().all(|(_, node)| node.is_found())
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Check that positions agree with visibility before the first cascade.
fn check_layout(store: &GraphStore) -> Result<(), GameError> {
    for (_, node) in store.iter() {
        match (node.is_visible(), node.position()) {
            (false, Some(_)) => {
                return Err(GameError::PlacedHiddenNode {
                    label: node.label().to_string(),
                });
            }
            (true, None) if !node.is_starting_node() => {
                return Err(GameError::UnplacedVisibleNode {
                    label: node.label().to_string(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
