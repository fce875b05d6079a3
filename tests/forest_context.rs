//! End-to-end: load edges from disk, build trees and forests, render contexts

mod common;

use common::{medical_edges, temp_file};
use trag::{EdgeSet, EntityForest, EntityTree, ForestConfig, TragConfig, TragError, END_MARKER};

#[test]
fn csv_file_builds_expected_tree() {
    let file = temp_file(".csv", "B,A\nC,A\nD,B\nA,A\n");
    let edges = EdgeSet::load(file.path()).unwrap();
    let tree = EntityTree::build("A", &edges);

    assert_eq!(tree.count_num(), 4);
    let a = tree.find("A").unwrap();
    let names: Vec<&str> = tree.children(a).iter().filter_map(|&i| tree.name(i)).collect();
    assert_eq!(names, vec!["B", "C"]);
}

#[test]
fn json_file_loads_pairs() {
    let file = temp_file(".json", r#"[["b","a"],["c","b"]]"#);
    let edges = EdgeSet::load(file.path()).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let err = EdgeSet::load("/nonexistent/edges.csv").unwrap_err();
    assert!(matches!(err, TragError::Io(_)));
}

#[test]
fn cycle_through_root_is_cut() {
    let tree = EntityTree::build("疾病", &medical_edges());

    // 疾病 → 心血管疾病 → 高血压 → 疾病 closes a cycle at the root
    assert_eq!(tree.count_num(), 7);
    assert_eq!(
        tree.get_context(tree.find("原发性高血压").unwrap()).as_deref(),
        Some("在某个树型关系中，原发性高血压的向上的层级关系有：高血压、心血管疾病、疾病。**CUK**")
    );
}

#[test]
fn middle_node_context_matches_downstream_format() {
    let tree = EntityTree::build("疾病", &medical_edges());
    let context = tree.get_context(tree.find("心血管疾病").unwrap()).unwrap();

    assert_eq!(
        context,
        "在某个树型关系中，心血管疾病的向上的层级关系有：疾病；心血管疾病的向下的子节点有：冠心病、高血压。**CUK**"
    );
    assert!(context.ends_with(END_MARKER));
}

#[test]
fn forest_uses_only_true_roots() {
    let forest = EntityForest::build(&medical_edges(), &ForestConfig::default());

    // 疾病 is a child of 高血压, so only 药物 is a root
    assert_eq!(forest.summary().roots, vec!["药物"]);
    assert_eq!(forest.node_count(), 3);
    assert!(forest.context_of("哮喘").is_none());
    assert_eq!(
        forest.context_of("药物").as_deref(),
        Some("药物的向下的子节点有：布洛芬、阿司匹林。**CUK**")
    );
}

#[test]
fn forest_limits_from_yaml_config() {
    let file = temp_file(".yaml", "forest:\n  max_tree_count: 1\n  lowercase: false\n");
    let config = TragConfig::from_yaml_file(file.path()).unwrap();

    let edges = EdgeSet::from_pairs([("B", "A"), ("Y", "X")]);
    let forest = EntityForest::build(&edges, &config.forest);

    assert_eq!(forest.tree_count(), 1);
    assert_eq!(forest.trees()[0].root_name(), "A");
}
