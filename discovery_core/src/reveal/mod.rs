//! Reveal Engine - the state machine deciding what the player has discovered.
//!
//! Every node is `Hidden`, `Teased` or `Found`:
//! 1. **Guess**: The raw guess is looked up without case
//! 2. **Resolve**: Found nodes report `AlreadyFound`; teased nodes become
//!    `Found`; unknown and hidden nodes both report `Incorrect`
//! 3. **Cascade**: A newly found node teases each hidden neighbor, which is
//!    placed on screen, and connects to every neighbor not yet connected
//! 4. **Notify**: Each change is queued on the session as a [`GameEvent`]

mod selection;

pub use selection::*;

use discovery_graph::{NodeId, NodeState, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::GameEvent;
use crate::session::{GameSession, GuessRecord};

/// Result of a submitted guess. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The node was already found; nothing changed.
    AlreadyFound,
    /// A teased node was found and its neighbors revealed.
    Correct,
    /// No such node, or the node is not on screen yet. The two cases are
    /// reported identically.
    Incorrect,
}

/// Applies guesses and selection changes to a [`GameSession`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealEngine;

impl RevealEngine {
    /// Create a new reveal engine.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a guess against the session.
    ///
    /// The guess is compared without case but is otherwise used as given;
    /// hosts trim input before submitting it.
    pub fn submit_guess(&self, session: &mut GameSession, guess: &str) -> GuessOutcome {
        let target = session
            .store
            .id_of(guess)
            .and_then(|id| {
                session
                    .store
                    .node(id)
                    .map(|node| (id, node.state(), node.label().to_string()))
            });

        let (outcome, text) = match target {
            Some((_, NodeState::Found, label)) => (GuessOutcome::AlreadyFound, label),
            Some((id, NodeState::Teased, label)) => {
                self.reveal(session, id);
                (GuessOutcome::Correct, label)
            }
            Some((_, NodeState::Hidden, _)) | None => (GuessOutcome::Incorrect, guess.to_string()),
        };

        debug!(session = %session.id(), guess, outcome = ?outcome, "guess resolved");
        session.history.push(GuessRecord { text, outcome });

        if outcome == GuessOutcome::Correct {
            if let Some(current) = session.selection {
                session.emit(GameEvent::SelectionChanged {
                    node: Some(current),
                });
            }
        }

        outcome
    }

    /// Focus a visible node by label.
    ///
    /// Unknown and hidden labels are ignored alike and return `None`.
    pub fn select(&self, session: &mut GameSession, label: &str) -> Option<SelectionView> {
        let id = session.store.id_of(label)?;
        self.select_node(session, id)
    }

    /// Focus a visible node by ID, e.g. from a click on a child entry.
    pub fn select_node(&self, session: &mut GameSession, id: NodeId) -> Option<SelectionView> {
        if !session.store.node(id)?.is_visible() {
            return None;
        }

        if session.selection != Some(id) {
            session.selection = Some(id);
            session.emit(GameEvent::SelectionChanged { node: Some(id) });
        }
        SelectionView::build(session, id)
    }

    /// Clear the focus. Returns `true` if a node was focused.
    pub fn deselect(&self, session: &mut GameSession) -> bool {
        if session.selection.take().is_none() {
            return false;
        }
        session.emit(GameEvent::SelectionChanged { node: None });
        true
    }

    /// The view for the focused node, if any.
    pub fn selection_view(&self, session: &GameSession) -> Option<SelectionView> {
        session
            .selection
            .and_then(|id| SelectionView::build(session, id))
    }

    /// Put every starting node on screen and tease its neighbors.
    ///
    /// Returns the number of starting nodes.
    pub(crate) fn expose_starting_nodes(&self, session: &mut GameSession) -> usize {
        let starting = session.store.starting_nodes();

        for &id in &starting {
            if let Some(position) = self.ensure_placed(session, id) {
                session.emit(GameEvent::NodeBecameVisible { node: id, position });
            }
            session.emit(GameEvent::NodeFound { node: id });
        }
        for &id in &starting {
            self.cascade(session, id);
        }

        starting.len()
    }

    /// Mark a teased node as found and cascade to its neighbors.
    fn reveal(&self, session: &mut GameSession, id: NodeId) {
        let Some(node) = session.store.node_mut(id) else {
            return;
        };
        if !node.mark_found() {
            return;
        }
        session.emit(GameEvent::NodeFound { node: id });
        self.cascade(session, id);
    }

    /// Tease every hidden neighbor of `id` and connect each new pair once.
    fn cascade(&self, session: &mut GameSession, id: NodeId) {
        let neighbors = session.store.neighbors(id).to_vec();
        let mut teased = 0;

        for neighbor in neighbors {
            let newly_visible = session
                .store
                .node_mut(neighbor)
                .is_some_and(|node| node.mark_visible());
            if newly_visible {
                teased += 1;
                if let Some(position) = self.ensure_placed(session, neighbor) {
                    session.emit(GameEvent::NodeBecameVisible {
                        node: neighbor,
                        position,
                    });
                }
            }

            if session.connections.insert(id, neighbor) {
                session.emit(GameEvent::ConnectionEstablished { a: id, b: neighbor });
            }
        }

        debug!(session = %session.id(), node = %id, teased, "cascade applied");
    }

    /// Get the position of a visible node, placing it first if it has none.
    ///
    /// Returns `None` only for an unknown node.
    fn ensure_placed(&self, session: &mut GameSession, id: NodeId) -> Option<Position> {
        if let Some(position) = session.store.node(id)?.position() {
            return Some(position);
        }
        let position = session.placer.place(&session.store, id);
        session.store.node_mut(id)?.place(position);
        Some(position)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::{GameConfig, PlacementConfig};
    use discovery_graph::{GraphDefinition, Node};
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    fn label(i: usize) -> String {
        format!("word {} {}", i, "x".repeat(i % 13))
    }

    fn build_session(n: usize, links: &[(usize, usize)], seed: u64) -> GameSession {
        let mut definition = GraphDefinition::new().with_starting(label(0));
        for i in 0..n {
            definition = definition.with_node(label(i));
        }
        for &(a, b) in links {
            let (a, b) = (a % n, b % n);
            if a != b {
                definition = definition.with_link(label(a), label(b));
            }
        }
        let config =
            GameConfig::default().with_placement(PlacementConfig::default().with_seed(seed));
        GameSession::from_definition(&definition, &config).unwrap()
    }

    fn snapshot(session: &GameSession) -> Vec<(NodeState, Option<Position>)> {
        session
            .store()
            .iter()
            .map(|(_, node)| (node.state(), node.position()))
            .collect()
    }

    fn assert_no_overlap(session: &GameSession) -> Result<(), TestCaseError> {
        let placer = session.placer();
        let buffer = placer.config().buffer;
        let visible: Vec<&Node> = session.store().visible().map(|(_, n)| n).collect();

        for (i, a) in visible.iter().enumerate() {
            for b in &visible[i + 1..] {
                let (Some(pa), Some(pb)) = (a.position(), b.position()) else {
                    return Err(TestCaseError::fail("visible node without a position"));
                };
                let required = placer.radius(a) + placer.radius(b) + buffer;
                prop_assert!(
                    pa.distance(&pb) >= required - 1e-9,
                    "{} and {} overlap",
                    a.label(),
                    b.label()
                );
            }
        }
        Ok(())
    }

    fn assert_gated(session: &GameSession) -> Result<(), TestCaseError> {
        let store = session.store();
        for (_, node) in store.visible() {
            let exposed = node.is_starting_node()
                || node
                    .neighbors()
                    .iter()
                    .any(|n| store.node(*n).is_some_and(|m| m.is_found()));
            prop_assert!(exposed, "{} is visible without a found neighbor", node.label());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn guesses_keep_every_invariant(
            n in 2usize..40,
            links in prop::collection::vec((0usize..40, 0usize..40), 0..80),
            guesses in prop::collection::vec(0usize..40, 0..120),
            seed in any::<u64>(),
        ) {
            let mut session = build_session(n, &links, seed);
            let engine = RevealEngine::new();
            let mut drawn: HashMap<(NodeId, NodeId), usize> = HashMap::new();

            assert_no_overlap(&session)?;
            assert_gated(&session)?;

            for g in guesses {
                let before = snapshot(&session);
                let target = NodeId::from_index(g % n);
                let prior = before[target.index()].0;

                let outcome = engine.submit_guess(&mut session, &label(g % n));
                let expected = match prior {
                    NodeState::Hidden => GuessOutcome::Incorrect,
                    NodeState::Teased => GuessOutcome::Correct,
                    NodeState::Found => GuessOutcome::AlreadyFound,
                };
                prop_assert_eq!(outcome, expected);

                let after = snapshot(&session);
                for ((state_before, pos_before), (state_after, pos_after)) in
                    before.iter().zip(&after)
                {
                    if *state_before != NodeState::Hidden {
                        prop_assert!(*state_after != NodeState::Hidden);
                        prop_assert_eq!(pos_before, pos_after);
                    }
                    if *state_before == NodeState::Found {
                        prop_assert_eq!(*state_after, NodeState::Found);
                    }
                }
                if outcome != GuessOutcome::Correct {
                    prop_assert_eq!(&before, &after);
                }

                assert_no_overlap(&session)?;
                assert_gated(&session)?;
            }

            for event in session.drain_events() {
                if let GameEvent::ConnectionEstablished { a, b } = event {
                    let key = if a <= b { (a, b) } else { (b, a) };
                    *drawn.entry(key).or_default() += 1;
                }
            }
            prop_assert!(drawn.values().all(|count| *count == 1));
        }

        #[test]
        fn guessing_every_teased_node_finds_the_component(
            n in 2usize..30,
            links in prop::collection::vec((0usize..30, 0usize..30), 0..60),
            seed in any::<u64>(),
        ) {
            let mut session = build_session(n, &links, seed);
            let engine = RevealEngine::new();

            loop {
                let teased: Vec<String> = session
                    .store()
                    .iter()
                    .filter(|(_, node)| node.state() == NodeState::Teased)
                    .map(|(_, node)| node.label().to_string())
                    .collect();
                if teased.is_empty() {
                    break;
                }
                for guess in teased {
                    prop_assert_eq!(
                        engine.submit_guess(&mut session, &guess),
                        GuessOutcome::Correct
                    );
                }
            }

            // Everything reachable from the start is found; nothing else is visible.
            let store = session.store();
            let mut reachable = HashSet::new();
            let mut stack = vec![NodeId::from_index(0)];
            while let Some(id) = stack.pop() {
                if reachable.insert(id) {
                    stack.extend(store.neighbors(id).iter().copied());
                }
            }
            for (id, node) in store.iter() {
                prop_assert_eq!(node.is_found(), reachable.contains(&id));
                prop_assert_eq!(node.is_visible(), reachable.contains(&id));
            }
            assert_no_overlap(&session)?;
        }
    }
}
