#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const SAMPLE_LABELS: &str = "tests/fixtures/sample.labels.txt";
pub const MALFORMED_LABELS: &str = "tests/fixtures/malformed.labels.txt";

pub fn labels_text(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(id, name)| format!("'{}': '{}',\n", id, name))
        .collect()
}

pub fn write_labels(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, labels_text(entries)).expect("write labels file");
}
