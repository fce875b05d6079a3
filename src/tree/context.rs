//! Natural-language hierarchy context for a tree node
//!
//! The output is parsed downstream, so every literal below must stay
//! byte-for-byte identical.

use super::build::EntityTree;
use super::node::NodeIdx;

/// Opening of the ancestor clause, before the entity name
pub const ANCESTOR_PREFIX: &str = "在某个树型关系中，";
/// Follows the entity name in the ancestor clause
pub const ANCESTOR_LEAD: &str = "的向上的层级关系有：";
/// Follows the entity name in the children clause
pub const CHILDREN_LEAD: &str = "的向下的子节点有：";
/// Joins names inside a clause
pub const NAME_SEPARATOR: &str = "、";
/// Joins the ancestor and children clauses
pub const CLAUSE_SEPARATOR: &str = "；";
/// Ends every context string
pub const END_MARKER: &str = "。**CUK**";

/// Maximum number of ancestors named in the ancestor clause
pub const MAX_ANCESTORS: usize = 3;

/// Renders ancestor/children summaries for nodes of one tree
#[derive(Debug, Clone, Copy)]
pub struct ContextFormatter<'a> {
    tree: &'a EntityTree,
}

impl<'a> ContextFormatter<'a> {
    pub fn new(tree: &'a EntityTree) -> Self {
        Self { tree }
    }

    /// Context string for `idx`, `None` if `idx` does not belong to the tree
    pub fn get_context(&self, idx: NodeIdx) -> Option<String> {
        let tree = self.tree;
        let entity = tree.name(idx)?;
        let mut context = String::new();

        let ancestors = tree.get_ancestors(idx);
        let nearest = &ancestors[..ancestors.len().min(MAX_ANCESTORS)];
        if !nearest.is_empty() {
            context.push_str(ANCESTOR_PREFIX);
            context.push_str(entity);
            context.push_str(ANCESTOR_LEAD);
            context.push_str(&join_names(tree, nearest));
        }

        let children = tree.children(idx);
        if !children.is_empty() {
            if !nearest.is_empty() {
                context.push_str(CLAUSE_SEPARATOR);
            }
            context.push_str(entity);
            context.push_str(CHILDREN_LEAD);
            context.push_str(&join_names(tree, children));
        }

        context.push_str(END_MARKER);
        Some(context)
    }
}

fn join_names(tree: &EntityTree, nodes: &[NodeIdx]) -> String {
    nodes
        .iter()
        .map(|&idx| tree.label(idx))
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}

impl EntityTree {
    /// Context string for `idx`, `None` if `idx` does not belong to this tree
    pub fn get_context(&self, idx: NodeIdx) -> Option<String> {
        ContextFormatter::new(self).get_context(idx)
    }

    /// `(name, context)` for every node, in level order
    pub fn contexts(&self) -> Vec<(String, String)> {
        let formatter = ContextFormatter::new(self);
        self.iter_level_order()
            .filter_map(|idx| {
                let context = formatter.get_context(idx)?;
                Some((self.label(idx).to_string(), context))
            })
            .collect()
    }
}
