//! Node representation inside an entity tree

use serde::{Deserialize, Serialize};

/// Stable index of a node inside its `EntityTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIdx(pub(crate) usize);

impl NodeIdx {
    /// Index of the root of every tree
    pub const ROOT: NodeIdx = NodeIdx(0);

    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named entity in a hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityNode {
    /// Entity name
    pub name: String,
    /// Parent node (`None` for the root)
    pub parent: Option<NodeIdx>,
    /// Children in discovery order
    pub children: Vec<NodeIdx>,
}

impl EntityNode {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeIdx>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
