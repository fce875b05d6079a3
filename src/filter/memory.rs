//! In-memory stand-in for the membership filter
//!
//! Exact-match storage keyed by fingerprint with a fixed key budget. It has
//! none of the cuckoo filter's displacement behaviour; it exists so the
//! adapter can run without the native filter.

use super::traits::{EntityKey, MembershipFilter, Status};
use crate::index::EntityInfo;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct InMemoryFilter {
    max_num_keys: usize,
    entries: BTreeMap<u64, EntityInfo>,
    compactions: usize,
    tree_limits: Option<(usize, usize)>,
}

impl InMemoryFilter {
    pub fn new(max_num_keys: usize) -> Self {
        Self {
            max_num_keys,
            entries: BTreeMap::new(),
            compactions: 0,
            tree_limits: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_num_keys
    }

    /// How many times `compact` has run
    pub fn compactions(&self) -> usize {
        self.compactions
    }

    /// Limits passed to the last `build_trees` call
    pub fn tree_limits(&self) -> Option<(usize, usize)> {
        self.tree_limits
    }
}

impl MembershipFilter for InMemoryFilter {
    fn insert(&mut self, item: &EntityKey, info: EntityInfo) -> Status {
        let fingerprint = item.fingerprint();
        if !self.entries.contains_key(&fingerprint) && self.entries.len() >= self.max_num_keys {
            return Status::NotEnoughSpace;
        }
        self.entries.insert(fingerprint, info);
        Status::Ok
    }

    fn extract(&self, item: &EntityKey) -> Option<EntityInfo> {
        self.entries.get(&item.fingerprint()).cloned()
    }

    fn compact(&mut self) {
        // entries are already kept in fingerprint order
        self.compactions += 1;
    }

    fn build_trees(&mut self, max_tree_count: usize, max_node_count: usize) {
        self.tree_limits = Some((max_tree_count, max_node_count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_extract() {
        let mut filter = InMemoryFilter::new(4);
        let mut info = EntityInfo::new();
        info.chain.extend([3, 4]);

        assert_eq!(filter.insert(&"heart".into(), info.clone()), Status::Ok);
        assert_eq!(filter.extract(&"heart".into()), Some(info));
        assert_eq!(filter.extract(&"lung".into()), None);
    }

    #[test]
    fn test_full_filter_reports_not_enough_space() {
        let mut filter = InMemoryFilter::new(1);
        assert_eq!(filter.insert(&"a".into(), EntityInfo::new()), Status::Ok);
        assert_eq!(filter.insert(&"b".into(), EntityInfo::new()), Status::NotEnoughSpace);
        // replacing an existing key needs no extra room
        assert_eq!(filter.insert(&"a".into(), EntityInfo::new()), Status::Ok);
        assert_eq!(filter.len(), 1);
    }
}
