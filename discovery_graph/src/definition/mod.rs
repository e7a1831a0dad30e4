//! Graph definitions - the document a puzzle is loaded from.
//!
//! ```json
//! {
//!   "nodes": [{ "name": "Coco" }, { "name": "Cocoa" }],
//!   "links": [{ "source": "Coco", "target": "Cocoa" }],
//!   "starting": ["Coco"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

use crate::error::{GraphError, GraphResult};
use crate::node::{normalize, Node};
use crate::store::GraphStore;

/// A node entry in a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub name: String,

    /// Draw this node as a parent category even if it is not a starting node.
    #[serde(default)]
    pub parent: bool,
}

/// A link entry in a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub source: String,
    pub target: String,
}

/// The full puzzle document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GraphDefinition {
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,

    #[serde(default)]
    pub links: Vec<LinkDefinition>,

    /// Labels that start found and visible.
    #[serde(default)]
    pub starting: Vec<String>,
}

impl GraphDefinition {
    /// Create a new empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node entry.
    pub fn with_node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push(NodeDefinition {
            name: name.into(),
            parent: false,
        });
        self
    }

    /// Add a link entry.
    pub fn with_link(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.links.push(LinkDefinition {
            source: source.into(),
            target: target.into(),
        });
        self
    }

    /// Add a starting label.
    pub fn with_starting(mut self, name: impl Into<String>) -> Self {
        self.starting.push(name.into());
        self
    }

    /// Parse a definition from JSON text.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a definition from a JSON reader.
    pub fn from_reader(reader: impl Read) -> GraphResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build a graph store from this definition.
    ///
    /// Starting labels are matched without case. The whole store is built or
    /// an error is returned; there is no partially built result.
    pub fn build(&self) -> GraphResult<GraphStore> {
        let starting: HashSet<String> = self.starting.iter().map(|s| normalize(s)).collect();

        let mut store = GraphStore::new();
        for def in &self.nodes {
            let is_starting = starting.contains(&normalize(&def.name));
            let node = Node::new(def.name.clone())
                .with_starting(is_starting)
                .with_parent_category(def.parent);
            store.add(node)?;
        }

        for label in &self.starting {
            store.require(label)?;
        }

        for link in &self.links {
            store.connect_labels(&link.source, &link.target)?;
        }

        Ok(store)
    }
}

impl TryFrom<&GraphDefinition> for GraphStore {
    type Error = GraphError;

    fn try_from(definition: &GraphDefinition) -> GraphResult<Self> {
        definition.build()
    }
}
