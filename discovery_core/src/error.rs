//! Errors that stop a game from starting.

use discovery_graph::GraphError;

use crate::config::ConfigError;

/// A game could not be started.
///
/// Guesses never produce errors; see [`crate::GuessOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The puzzle graph is malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The configuration is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A hidden node already has a position, so it would appear without
    /// being placed clear of the others.
    #[error("hidden node '{label}' already has a position")]
    PlacedHiddenNode { label: String },

    /// A visible node that is not a starting node has no position.
    #[error("visible node '{label}' has no position")]
    UnplacedVisibleNode { label: String },
}
