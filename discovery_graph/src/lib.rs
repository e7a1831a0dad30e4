//! # Discovery Graph
//!
//! The "word web" crate - holds every node of a discovery puzzle, the edges
//! between them and the definition format they are loaded from.
//! This crate is the single owner of node state and does not contain any reveal
//! rules or placement logic.
//!
//! ## Core Components
//!
//! - **node**: Labeled nodes, their visibility flags and display helpers
//! - **store**: The arena-backed graph store with case-insensitive lookup
//! - **definition**: The `{nodes, links, starting}` document a puzzle is built from

pub mod definition;
pub mod error;
pub mod node;
pub mod store;

pub use definition::*;
pub use error::*;
pub use node::*;
pub use store::*;
