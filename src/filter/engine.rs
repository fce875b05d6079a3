//! TragEngine: the address index paired with a membership filter

use super::traits::{EntityKey, MembershipFilter, Status};
use crate::index::{EntityAddressIndex, EntityInfo, PairId};
use serde::{Deserialize, Serialize};

/// Where an entity lookup was answered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Lookup {
    /// Pair ids registered in the address index
    Addresses(Vec<PairId>),
    /// Metadata held by the filter
    Filter(EntityInfo),
    Missing,
}

/// Owns an address index and a filter; filter results pass through untouched
#[derive(Debug)]
pub struct TragEngine<F> {
    index: EntityAddressIndex,
    filter: F,
}

impl<F: MembershipFilter> TragEngine<F> {
    pub fn new(filter: F) -> Self {
        Self {
            index: EntityAddressIndex::new(),
            filter,
        }
    }

    pub fn index(&self) -> &EntityAddressIndex {
        &self.index
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn append_ids(&self, name: &str, ids: &[PairId]) {
        self.index.append_ids(name, ids);
    }

    pub fn read_ids(&self, name: &str) -> Vec<PairId> {
        self.index.read_ids(name)
    }

    pub fn insert(&mut self, name: &str, info: EntityInfo) -> Status {
        let status = self.filter.insert(&EntityKey::new(name), info);
        if !status.is_ok() {
            tracing::debug!(entity = name, %status, "filter insert did not succeed");
        }
        status
    }

    pub fn extract(&self, name: &str) -> Option<EntityInfo> {
        self.filter.extract(&EntityKey::new(name))
    }

    pub fn compact(&mut self) {
        self.filter.compact();
    }

    pub fn build_trees(&mut self, max_tree_count: usize, max_node_count: usize) {
        self.filter.build_trees(max_tree_count, max_node_count);
    }

    /// Registered addresses first, then the filter's metadata
    pub fn lookup(&self, name: &str) -> Lookup {
        let ids = self.index.read_ids(name);
        if !ids.is_empty() {
            return Lookup::Addresses(ids);
        }
        match self.extract(name) {
            Some(info) => Lookup::Filter(info),
            None => Lookup::Missing,
        }
    }

    /// Release every chain held by the index, returning the entity count
    pub fn teardown(&self) -> usize {
        self.index.clear()
    }
}
