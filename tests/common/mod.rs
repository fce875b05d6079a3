//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use trag::EdgeSet;

/// A small medical taxonomy with two roots and a cycle
pub fn medical_edges() -> EdgeSet {
    EdgeSet::from_pairs([
        ("心血管疾病", "疾病"),
        ("呼吸系统疾病", "疾病"),
        ("高血压", "心血管疾病"),
        ("冠心病", "心血管疾病"),
        ("原发性高血压", "高血压"),
        ("哮喘", "呼吸系统疾病"),
        ("疾病", "高血压"),
        ("阿司匹林", "药物"),
        ("布洛芬", "药物"),
    ])
}

/// Write `contents` to a temp file with the given suffix
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
