use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn trazo() -> Command {
    cargo_bin_cmd!("trazo")
}

/// Write a graph document into `dir` and return its path.
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, raw: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, raw).expect("write graph fixture");
    path
}

/// A two-component graph: A-B connected, C-D connected, no bridge.
#[allow(dead_code)]
pub const DISCONNECTED_GRAPH: &str = r#"{
    "nodes": [
        {"id": "A", "x": 0, "y": 0},
        {"id": "B", "x": 100, "y": 0},
        {"id": "C", "x": 0, "y": 100},
        {"id": "D", "x": 100, "y": 100}
    ],
    "edges": [
        {"source": "A", "target": "B", "weight": 1},
        {"source": "C", "target": "D", "weight": 2}
    ]
}"#;
