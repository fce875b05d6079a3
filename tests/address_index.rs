//! Address index behaviour across calls, entities and threads

use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use trag::{EntityAddressIndex, EMPTY_SLOT, SLOTS_PER_NODE};

#[test]
fn cross_node_growth_and_accumulation() {
    let index = EntityAddressIndex::new();
    index.append_ids("冠心病", &[1, 2, 3, 4, 5]);
    index.append_ids("冠心病", &[6]);

    assert_eq!(index.read_ids("冠心病"), vec![1, 2, 3, 4, 5, 6]);
    assert!(index.read_ids("哮喘").is_empty());
}

#[test]
fn entities_are_independent() {
    let index = EntityAddressIndex::new();
    index.append_ids("a", &[1, 2]);
    index.append_ids("b", &[9]);
    index.append_ids("a", &[3]);

    assert_eq!(index.read_ids("a"), vec![1, 2, 3]);
    assert_eq!(index.read_ids("b"), vec![9]);
}

#[test]
fn concurrent_appends_to_distinct_entities() {
    let index = Arc::new(EntityAddressIndex::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let name = format!("entity-{}", t);
                for i in 0..50 {
                    index.append_ids(&name, &[i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(index.len(), 8);
    for t in 0..8 {
        let expected: Vec<i32> = (0..50).collect();
        assert_eq!(index.read_ids(&format!("entity-{}", t)), expected);
    }
}

#[test]
fn concurrent_appends_to_one_entity_lose_nothing() {
    let index = Arc::new(EntityAddressIndex::new());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for i in 0..25 {
                    index.append_ids("shared", &[t * 100 + i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut ids = index.read_ids("shared");
    assert_eq!(ids.len(), 100);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

proptest! {
    #[test]
    fn reads_return_every_append_in_order(
        batches in prop::collection::vec(prop::collection::vec(0i32..10_000, 0..8), 0..12)
    ) {
        let index = EntityAddressIndex::new();
        for batch in &batches {
            index.append_ids("e", batch);
        }

        let expected: Vec<i32> = batches.iter().flatten().copied().collect();
        prop_assert_eq!(index.read_ids("e"), expected.clone());

        let nodes = (expected.len() + SLOTS_PER_NODE - 1) / SLOTS_PER_NODE;
        prop_assert_eq!(index.chain_node_count("e"), nodes);
    }

    #[test]
    fn sentinel_never_surfaces(ids in prop::collection::vec(-1i32..5, 1..20)) {
        let index = EntityAddressIndex::new();
        index.append_ids("e", &ids);
        prop_assert!(!index.read_ids("e").contains(&EMPTY_SLOT));
    }
}
