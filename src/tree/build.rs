//! EntityTree: breadth-first reconstruction of a hierarchy from flat edges

use super::edges::EdgeSet;
use super::node::{EntityNode, NodeIdx};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A rooted entity hierarchy, built once and immutable afterwards
#[derive(Debug, Clone)]
pub struct EntityTree {
    nodes: Vec<EntityNode>,
    by_name: HashMap<String, NodeIdx>,
}

impl EntityTree {
    /// Build the tree rooted at `root` from `(child, parent)` pairs
    ///
    /// Children of each node are visited in lexicographic order. Self-loops,
    /// the edge back to the current node's parent, and names already placed
    /// elsewhere in the tree are skipped. Names not reachable from `root`
    /// are left out.
    pub fn build(root: &str, edges: &EdgeSet) -> Self {
        let adjacency = invert(edges);

        let mut tree = Self {
            nodes: vec![EntityNode::new(root, None)],
            by_name: HashMap::new(),
        };
        tree.by_name.insert(root.to_string(), NodeIdx::ROOT);

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(root);

        let mut queue: VecDeque<NodeIdx> = VecDeque::new();
        queue.push_back(NodeIdx::ROOT);

        while let Some(current) = queue.pop_front() {
            let Some(candidates) = adjacency.get(tree.nodes[current.0].name.as_str()) else {
                continue;
            };

            for &child in candidates {
                let node = &tree.nodes[current.0];
                if child == node.name {
                    continue;
                }
                if node.parent.is_some_and(|p| tree.nodes[p.0].name == child) {
                    continue;
                }
                if !visited.insert(child) {
                    continue;
                }
                let idx = tree.attach(current, child);
                queue.push_back(idx);
            }
        }

        tracing::debug!(root, nodes = tree.nodes.len(), "built entity tree");
        tree
    }

    fn attach(&mut self, parent: NodeIdx, name: &str) -> NodeIdx {
        let idx = NodeIdx(self.nodes.len());
        self.nodes.push(EntityNode::new(name, Some(parent)));
        self.nodes[parent.0].children.push(idx);
        self.by_name.insert(name.to_string(), idx);
        idx
    }

    /// The root node index
    pub fn root(&self) -> NodeIdx {
        NodeIdx::ROOT
    }

    /// Name of the root entity
    pub fn root_name(&self) -> &str {
        &self.nodes[NodeIdx::ROOT.0].name
    }

    pub fn node(&self, idx: NodeIdx) -> Option<&EntityNode> {
        self.nodes.get(idx.0)
    }

    /// Entity name of a node, `None` if `idx` does not belong to this tree
    pub fn name(&self, idx: NodeIdx) -> Option<&str> {
        self.nodes.get(idx.0).map(|n| n.name.as_str())
    }

    /// Name of a node reached through this tree's own links
    pub(crate) fn label(&self, idx: NodeIdx) -> &str {
        &self.nodes[idx.0].name
    }

    pub fn parent(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.nodes.get(idx.0).and_then(|n| n.parent)
    }

    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.nodes
            .get(idx.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a node by entity name
    pub fn find(&self, name: &str) -> Option<NodeIdx> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Ancestors of a node, nearest first, ending at the root
    pub fn get_ancestors(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        let mut ancestors = Vec::new();
        let mut cursor = self.parent(idx);
        while let Some(ancestor) = cursor {
            ancestors.push(ancestor);
            cursor = self.parent(ancestor);
        }
        ancestors
    }

    /// Total number of nodes, counted by a level-order walk from the root
    pub fn count_num(&self) -> usize {
        self.levels_idx().iter().map(Vec::len).sum()
    }

    /// Node names grouped by depth, root level first
    pub fn levels(&self) -> Vec<Vec<&str>> {
        self.levels_idx()
            .into_iter()
            .map(|level| level.into_iter().map(|idx| self.label(idx)).collect())
            .collect()
    }

    /// All nodes in level order
    pub fn iter_level_order(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.levels_idx().into_iter().flatten()
    }

    fn levels_idx(&self) -> Vec<Vec<NodeIdx>> {
        let mut levels = Vec::new();
        let mut current = vec![NodeIdx::ROOT];

        while !current.is_empty() {
            let next: Vec<NodeIdx> = current
                .iter()
                .flat_map(|&idx| self.children(idx).iter().copied())
                .collect();
            levels.push(current);
            current = next;
        }
        levels
    }
}

impl std::fmt::Display for EntityTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (depth, level) in self.levels().iter().enumerate() {
            writeln!(f, "hierarchy: {} {}", depth, level.join(" "))?;
        }
        Ok(())
    }
}

/// parent → ordered set of declared children
fn invert(edges: &EdgeSet) -> BTreeMap<&str, BTreeSet<&str>> {
    let mut adjacency: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (child, parent) in edges.iter() {
        adjacency
            .entry(parent.as_str())
            .or_default()
            .insert(child.as_str());
    }
    adjacency
}
