//! # Discovery Core
//!
//! The engine of the word web discovery game. This crate drives a
//! `discovery_graph` store through a game: it resolves guesses, reveals
//! neighbors, places new nodes on the play area and reports every change as
//! an event for whatever renders the game.
//!
//! ## Core Components
//!
//! - **reveal**: The guess/selection state machine and cascading reveal
//! - **placement**: Rejection-sampled, non-overlapping node placement
//! - **session**: The explicit per-game context (store, placer, selection, log)
//! - **events**: Events raised for the presentation layer
//! - **config**: TOML configuration for placement and the guess log
//!
//! ## Example
//!
//! ```
//! use discovery_core::{GameConfig, GameSession, GuessOutcome, RevealEngine};
//!
//! let json = r#"{
//!     "nodes": [{"name": "Coco"}, {"name": "Cocoa"}, {"name": "Chanel"}],
//!     "links": [{"source": "Coco", "target": "Cocoa"}, {"source": "Coco", "target": "Chanel"}],
//!     "starting": ["Coco"]
//! }"#;
//! let mut session = GameSession::from_json(json, &GameConfig::default()).unwrap();
//! let engine = RevealEngine::new();
//!
//! assert_eq!(engine.submit_guess(&mut session, "coco"), GuessOutcome::AlreadyFound);
//! assert_eq!(engine.submit_guess(&mut session, "cocoa"), GuessOutcome::Correct);
//! assert_eq!(engine.submit_guess(&mut session, "dior"), GuessOutcome::Incorrect);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Event-Driven**: The engine reacts to player actions and queues events; it never renders
//! - **Monotonic**: Nodes only ever move from hidden to teased to found, and never move on screen
//! - **No Leaks**: A guess for a node that is not on screen looks exactly like a wrong guess

pub mod config;
pub mod error;
pub mod events;
pub mod placement;
pub mod reveal;
pub mod session;

pub use config::*;
pub use error::*;
pub use events::*;
pub use placement::*;
pub use reveal::*;
pub use session::*;
