//! EntityForest: one tree per root of an edge relation, within size limits

use super::build::EntityTree;
use super::edges::EdgeSet;
use super::node::NodeIdx;
use crate::config::ForestConfig;
use serde::{Deserialize, Serialize};

/// Summary of a built forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestSummary {
    pub tree_count: usize,
    pub node_count: usize,
    pub roots: Vec<String>,
}

/// A bounded collection of entity trees
#[derive(Debug, Clone, Default)]
pub struct EntityForest {
    trees: Vec<EntityTree>,
}

impl EntityForest {
    /// Build trees for every root of `edges`, in root name order
    ///
    /// Stops before the first tree that would push the total node count
    /// past `max_node_count`, or once `max_tree_count` trees are kept.
    pub fn build(edges: &EdgeSet, config: &ForestConfig) -> Self {
        let edges = edges.normalized(config.lowercase);
        let mut trees = Vec::new();
        let mut node_count = 0;

        for root in edges.roots() {
            if trees.len() >= config.max_tree_count {
                break;
            }
            let tree = EntityTree::build(root, &edges);
            let size = tree.count_num();
            if node_count + size > config.max_node_count {
                tracing::debug!(root, size, node_count, "node limit reached");
                break;
            }
            node_count += size;
            trees.push(tree);
        }

        tracing::info!(trees = trees.len(), nodes = node_count, "built entity forest");
        Self { trees }
    }

    pub fn trees(&self) -> &[EntityTree] {
        &self.trees
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Total nodes across all trees
    pub fn node_count(&self) -> usize {
        self.trees.iter().map(EntityTree::count_num).sum()
    }

    /// First tree containing `name`, with the node's index in it
    pub fn locate(&self, name: &str) -> Option<(&EntityTree, NodeIdx)> {
        self.trees
            .iter()
            .find_map(|tree| tree.find(name).map(|idx| (tree, idx)))
    }

    /// Context string of `name` in the first tree that contains it
    pub fn context_of(&self, name: &str) -> Option<String> {
        self.locate(name).and_then(|(tree, idx)| tree.get_context(idx))
    }

    pub fn summary(&self) -> ForestSummary {
        ForestSummary {
            tree_count: self.tree_count(),
            node_count: self.node_count(),
            roots: self.trees.iter().map(|t| t.root_name().to_string()).collect(),
        }
    }
}
