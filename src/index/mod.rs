//! Entity address index

mod chain;
mod store;

pub use chain::{AddressChain, ChainIdx, ChainNode, ChainNodes, PairId, EMPTY_SLOT, SLOTS_PER_NODE};
pub use store::{EntityAddressIndex, EntityInfo};
