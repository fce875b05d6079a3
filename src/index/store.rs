//! EntityAddressIndex: entity name → temperature + address chain

use super::chain::{AddressChain, PairId};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Per-entity metadata owned by the index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Priority/usage counter for ranking or eviction
    pub temperature: i64,
    /// Pair ids registered for this entity
    pub chain: AddressChain,
}

impl EntityInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupied pair ids in write order
    pub fn ids(&self) -> Vec<PairId> {
        self.chain.ids()
    }
}

/// Append-only multi-value address index
///
/// Backed by a sharded map: a register-then-append sequence for one entity
/// holds that entity's shard lock for its whole duration, and reads of
/// different entities do not contend unless they share a shard.
#[derive(Debug, Default)]
pub struct EntityAddressIndex {
    entries: DashMap<String, EntityInfo>,
}

impl EntityAddressIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the entity's record, creating it if absent
    ///
    /// Never resets an existing record. The returned value is a snapshot.
    pub fn register_or_get(&self, name: &str) -> EntityInfo {
        self.entries
            .entry(name.to_string())
            .or_insert_with(EntityInfo::new)
            .clone()
    }

    /// Append ids to the end of the entity's chain, in order
    ///
    /// An empty slice is a no-op: the entity is not registered and no chain
    /// node is allocated.
    pub fn append_ids(&self, name: &str, ids: &[PairId]) {
        if ids.is_empty() {
            return;
        }

        let mut entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(EntityInfo::new);
        let stored = entry.chain.extend(ids.iter().copied());

        if stored < ids.len() {
            tracing::warn!(
                entity = name,
                skipped = ids.len() - stored,
                "skipped unrepresentable empty-slot ids"
            );
        }
        tracing::debug!(entity = name, appended = stored, "appended pair ids");
    }

    /// All ids registered for an entity, in write order
    ///
    /// Unknown entities yield an empty list.
    pub fn read_ids(&self, name: &str) -> Vec<PairId> {
        self.entries
            .get(name)
            .map(|info| info.chain.ids())
            .unwrap_or_default()
    }

    /// Register a whole name → ids mapping
    pub fn set_addresses<I, S>(&self, mapping: I)
    where
        I: IntoIterator<Item = (S, Vec<PairId>)>,
        S: AsRef<str>,
    {
        for (name, ids) in mapping {
            self.append_ids(name.as_ref(), &ids);
        }
    }

    /// Check whether an entity has been registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Temperature of a registered entity
    pub fn temperature(&self, name: &str) -> Option<i64> {
        self.entries.get(name).map(|info| info.temperature)
    }

    /// Number of allocated chain nodes for an entity (0 if unknown)
    pub fn chain_node_count(&self, name: &str) -> usize {
        self.entries
            .get(name)
            .map(|info| info.chain.node_count())
            .unwrap_or(0)
    }

    /// Names of all registered entities, sorted
    pub fn entity_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every entity and its chain
    ///
    /// Returns the number of entities released.
    pub fn clear(&self) -> usize {
        let released = self.entries.len();
        self.entries.clear();
        tracing::debug!(released, "cleared entity address index");
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entity_reads_empty() {
        let index = EntityAddressIndex::new();
        assert!(index.read_ids("nobody").is_empty());
        assert!(!index.contains("nobody"));
    }

    #[test]
    fn test_register_creates_cold_empty_record() {
        let index = EntityAddressIndex::new();
        let info = index.register_or_get("aspirin");

        assert_eq!(info.temperature, 0);
        assert!(info.chain.is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_append_across_nodes_and_calls() {
        let index = EntityAddressIndex::new();
        index.append_ids("aspirin", &[1, 2, 3, 4, 5]);
        index.append_ids("aspirin", &[6]);

        assert_eq!(index.read_ids("aspirin"), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(index.chain_node_count("aspirin"), 2);
    }

    #[test]
    fn test_empty_append_is_noop() {
        let index = EntityAddressIndex::new();
        index.append_ids("aspirin", &[]);
        assert!(!index.contains("aspirin"));

        index.append_ids("aspirin", &[7, 8, 9]);
        index.append_ids("aspirin", &[]);
        assert_eq!(index.chain_node_count("aspirin"), 1);
        assert_eq!(index.read_ids("aspirin"), vec![7, 8, 9]);
    }

    #[test]
    fn test_reregister_keeps_record() {
        let index = EntityAddressIndex::new();
        index.entries.insert(
            "aspirin".to_string(),
            EntityInfo {
                temperature: 4,
                chain: AddressChain::new(),
            },
        );
        index.append_ids("aspirin", &[1, 2]);

        let info = index.register_or_get("aspirin");
        index.append_ids("aspirin", &[3]);

        assert_eq!(info.temperature, 4);
        assert_eq!(index.temperature("aspirin"), Some(4));
        assert_eq!(index.read_ids("aspirin"), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_addresses_and_clear() {
        let index = EntityAddressIndex::new();
        index.set_addresses(vec![("a", vec![1]), ("b", vec![2, 3]), ("c", vec![])]);

        assert_eq!(index.entity_names(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(index.clear(), 2);
        assert!(index.is_empty());
        assert!(index.read_ids("b").is_empty());
    }
}
