//! Entity hierarchies built from flat parent-child relations

mod build;
mod context;
mod edges;
mod forest;
mod node;


pub use build::EntityTree;
pub use context::{
    ContextFormatter, ANCESTOR_LEAD, ANCESTOR_PREFIX, CHILDREN_LEAD, CLAUSE_SEPARATOR, END_MARKER,
    MAX_ANCESTORS, NAME_SEPARATOR,
};
pub use edges::{normalize_name, EdgeSet};
pub use forest::{EntityForest, ForestSummary};
pub use node::{EntityNode, NodeIdx};
