//! AddressChain: append-only storage of abstract pair ids for one entity
//!
//! The chain is a linked sequence of fixed-capacity nodes kept in an arena.
//! Links are stable indices into that arena, so the whole chain is released
//! at once when it is dropped.

use serde::{Deserialize, Serialize};

/// Identifier of a position inside the external filter's tree structures
pub type PairId = i32;

/// Slot value meaning "unoccupied"
pub const EMPTY_SLOT: PairId = -1;

/// Capacity of a single chain node
pub const SLOTS_PER_NODE: usize = 3;

/// Stable index of a node inside an `AddressChain` arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainIdx(usize);

impl ChainIdx {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// One fixed-capacity record of the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainNode {
    /// Filled strictly left to right; `EMPTY_SLOT` marks the free tail
    pub slots: [PairId; SLOTS_PER_NODE],
    /// Following node, if any
    pub next: Option<ChainIdx>,
}

impl ChainNode {
    fn empty() -> Self {
        Self {
            slots: [EMPTY_SLOT; SLOTS_PER_NODE],
            next: None,
        }
    }

    /// Index of the first free slot, or `None` if the node is full
    fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|&s| s == EMPTY_SLOT)
    }

    /// Occupied slots in write order
    pub fn occupied(&self) -> impl Iterator<Item = PairId> + '_ {
        self.slots.iter().copied().filter(|&s| s != EMPTY_SLOT)
    }
}

/// Growable, append-only sequence of pair ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressChain {
    nodes: Vec<ChainNode>,
    head: Option<ChainIdx>,
    tail: Option<ChainIdx>,
}

impl AddressChain {
    /// Create an empty chain (no nodes allocated)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single id after every occupied slot
    ///
    /// Fills the tail node first and only allocates a node when a slot must
    /// be written and none remain. Returns `false` (and stores nothing) for
    /// `EMPTY_SLOT`, which cannot be represented.
    pub fn push(&mut self, id: PairId) -> bool {
        if id == EMPTY_SLOT {
            return false;
        }

        let free = self
            .tail
            .and_then(|t| self.nodes[t.0].first_free().map(|slot| (t, slot)));

        let (idx, slot) = match free {
            Some(found) => found,
            None => (self.allocate(), 0),
        };
        self.nodes[idx.0].slots[slot] = id;
        true
    }

    /// Append ids in order, returning how many were stored
    pub fn extend<I: IntoIterator<Item = PairId>>(&mut self, ids: I) -> usize {
        ids.into_iter().filter(|&id| self.push(id)).count()
    }

    fn allocate(&mut self) -> ChainIdx {
        let idx = ChainIdx(self.nodes.len());
        self.nodes.push(ChainNode::empty());
        match self.tail {
            Some(t) => self.nodes[t.0].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        idx
    }

    /// Walk the chain from the head, following `next` links
    pub fn iter_nodes(&self) -> ChainNodes<'_> {
        ChainNodes {
            chain: self,
            cursor: self.head,
        }
    }

    /// All occupied ids in write order
    pub fn ids(&self) -> Vec<PairId> {
        self.iter_nodes().flat_map(ChainNode::occupied).collect()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.iter_nodes().map(|n| n.occupied().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of allocated nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn head(&self) -> Option<ChainIdx> {
        self.head
    }

    pub fn node(&self, idx: ChainIdx) -> Option<&ChainNode> {
        self.nodes.get(idx.0)
    }
}

/// Iterator over the nodes of an `AddressChain` in link order
pub struct ChainNodes<'a> {
    chain: &'a AddressChain,
    cursor: Option<ChainIdx>,
}

impl<'a> Iterator for ChainNodes<'a> {
    type Item = &'a ChainNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.nodes.get(self.cursor?.0)?;
        self.cursor = node.next;
        Some(node)
    }
}
