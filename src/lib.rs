//! TRAG: entity addresses and hierarchical context for tree-augmented retrieval
//!
//! Two independent subsystems, combined only by the caller:
//!
//! - **Address index**: entity name → ordered abstract pair ids (positions in
//!   an external membership filter), stored in append-only chains of
//!   fixed-capacity nodes, plus a per-entity temperature counter.
//! - **Entity trees**: rooted hierarchies rebuilt from flat `(child, parent)`
//!   edges by a deterministic breadth-first walk, with a fixed-format
//!   context string for each node.
//!
//! The membership filter itself is external; [`filter::MembershipFilter`]
//! describes what this crate expects of it.
//!
//! # Example
//!
//! ```
//! use trag::{EdgeSet, EntityAddressIndex, EntityTree};
//!
//! let index = EntityAddressIndex::new();
//! index.append_ids("heart", &[4, 9]);
//! assert_eq!(index.read_ids("heart"), vec![4, 9]);
//!
//! let edges = EdgeSet::from_pairs([("heart", "organ")]);
//! let tree = EntityTree::build("organ", &edges);
//! let heart = tree.find("heart").unwrap();
//! assert!(tree.get_context(heart).unwrap().ends_with("。**CUK**"));
//! ```

pub mod config;
mod error;
pub mod filter;
pub mod index;
pub mod tree;

pub use config::{FilterConfig, ForestConfig, TragConfig};
pub use error::{TragError, TragResult};
pub use filter::{EntityKey, InMemoryFilter, Lookup, MembershipFilter, Status, TragEngine};
pub use index::{
    AddressChain, ChainIdx, ChainNode, EntityAddressIndex, EntityInfo, PairId, EMPTY_SLOT,
    SLOTS_PER_NODE,
};
pub use tree::{
    ContextFormatter, EdgeSet, EntityForest, EntityNode, EntityTree, ForestSummary, NodeIdx,
    END_MARKER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
