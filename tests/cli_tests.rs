//! Integration tests for the trazo CLI
//!
//! These tests run the trazo binary and verify output and exit codes.

mod common;

use common::{trazo, write_graph, DISCONNECTED_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    trazo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trazo"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("gcd"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    trazo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trazo"));
}

#[test]
fn test_no_command_is_a_usage_error() {
    trazo().assert().code(2);
}

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    trazo().args(["--format", "csv", "path", "A", "F"]).assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    trazo()
        .args(["--format", "json", "path", "A", "F", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    trazo()
        .args(["--format", "json", "--format", "human", "path", "A", "F"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_missing_node_exit_code_3() {
    trazo()
        .args(["path", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found"));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    trazo()
        .args(["path", "A", "F", "--graph", "/nonexistent/graph.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_invalid_graph_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "bad.json",
        r#"{"nodes": [{"id": "A"}, {"id": "B"}],
            "edges": [{"source": "A", "target": "B", "weight": 0}]}"#,
    );

    trazo()
        .args(["path", "A", "B", "--graph"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

// ============================================================================
// path command
// ============================================================================

#[test]
fn test_path_on_sample_graph() {
    trazo()
        .args(["path", "A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starting Dijkstra from A towards F"))
        .stdout(predicate::str::contains(
            "path: A -> B -> E -> F (distance 7, 3 hops)",
        ));
}

#[test]
fn test_path_json_output() {
    let output = trazo()
        .args(["--format", "json", "path", "A", "F"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let run: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(run["start"], "A");
    assert_eq!(run["outcome"]["result"], "found");
    assert_eq!(run["outcome"]["total_distance"], 7);
    let path: Vec<&str> = run["outcome"]["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(path, vec!["A", "B", "E", "F"]);
    // Unreached nodes would serialize as null; here everything is finite
    assert_eq!(run["distances"]["F"], 7);
}

#[test]
fn test_path_start_equals_end() {
    trazo()
        .args(["path", "A", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: A (distance 0, 0 hops)"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "disconnected.json", DISCONNECTED_GRAPH);

    trazo()
        .args(["path", "A", "C", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A to C"));
}

#[test]
fn test_path_records_output() {
    trazo()
        .args(["--format", "records", "path", "A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H trazo=1 records=1 mode=path start=A end=F",
        ))
        .stdout(predicate::str::contains("P A B E F"))
        .stdout(predicate::str::contains("R found=1 distance=7 hops=3"));
}

#[test]
fn test_path_records_marks_unreachable_distances() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "disconnected.json", DISCONNECTED_GRAPH);

    trazo()
        .args(["--format", "records", "path", "A", "C", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("D C inf"))
        .stdout(predicate::str::contains("R found=0"));
}

#[test]
fn test_path_replay_with_zero_delay() {
    trazo()
        .args(["path", "A", "F", "--replay", "--speed", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "path: A -> B -> E -> F (distance 7, 3 hops)",
        ));
}

// ============================================================================
// gcd command
// ============================================================================

#[test]
fn test_gcd_human_output() {
    trazo()
        .args(["gcd", "48", "18", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("process 1: gcd(48, 18)"))
        .stdout(predicate::str::contains("48 / 18 = 2, remainder 12"))
        .stdout(predicate::str::contains("gcd(48, 18, 24) = 6"));
}

#[test]
fn test_gcd_json_output() {
    let output = trazo()
        .args(["--format", "json", "gcd", "48", "18", "24"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let run: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(run["final_mcd"], 6);
    assert_eq!(run["processes"].as_array().unwrap().len(), 2);
    assert_eq!(run["processes"][0]["quotients"], serde_json::json!([2, 1, 2]));
    // The first step of each process is the initialization marker
    assert_eq!(run["processes"][0]["steps"][0]["quotient"], serde_json::Value::Null);
}

#[test]
fn test_gcd_records_output() {
    trazo()
        .args(["--format", "records", "gcd", "48", "18", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H trazo=1 records=1 mode=gcd numbers=48,18,24",
        ))
        .stdout(predicate::str::contains("P 1 a=48 b=18 mcd=6 pending=24"))
        .stdout(predicate::str::contains("D 1 48 18 2 12"))
        .stdout(predicate::str::contains("R mcd=6"));
}

#[test]
fn test_gcd_requires_at_least_two_numbers() {
    trazo().args(["gcd", "48"]).assert().code(2);
}

#[test]
fn test_gcd_rejects_more_than_six_numbers() {
    trazo()
        .args(["gcd", "2", "4", "6", "8", "10", "12", "14"])
        .assert()
        .code(2);
}

#[test]
fn test_gcd_rejects_out_of_range_numbers() {
    trazo().args(["gcd", "0", "12"]).assert().code(2);
    trazo().args(["gcd", "12", "10000"]).assert().code(2);
}

#[test]
fn test_gcd_replay_with_zero_delay() {
    trazo()
        .args(["gcd", "48", "18", "24", "--replay", "--speed", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start: gcd(48, 18)"))
        .stdout(predicate::str::contains("gcd(48, 18, 24) = 6"));
}

// ============================================================================
// graph command
// ============================================================================

#[test]
fn test_graph_human_output() {
    trazo()
        .args(["graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 nodes, 12 edges"))
        .stdout(predicate::str::contains("edge A -- B weight 4"));
}

#[test]
fn test_graph_sample_emits_valid_json() {
    let output = trazo()
        .args(["graph", "--sample"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 7);
    assert_eq!(doc["edges"].as_array().unwrap().len(), 12);
}

#[test]
fn test_graph_sample_roundtrips_through_path() {
    let dir = tempdir().unwrap();
    let output = trazo()
        .args(["graph", "--sample"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let path = write_graph(dir.path(), "sample.json", &String::from_utf8(output).unwrap());

    trazo()
        .args(["path", "A", "F", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "path: A -> B -> E -> F (distance 7, 3 hops)",
        ));
}

#[test]
fn test_graph_records_output() {
    trazo()
        .args(["--format", "records", "graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H trazo=1 records=1 mode=graph nodes=7 edges=12",
        ))
        .stdout(predicate::str::contains("E A B 4"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_default_format_applies() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("trazo.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let output = trazo()
        .args(["--config"])
        .arg(&config)
        .args(["gcd", "48", "18"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let run: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(run["final_mcd"], 6);
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("trazo.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    trazo()
        .args(["--config"])
        .arg(&config)
        .args(["--format", "human", "gcd", "48", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gcd(48, 18) = 6"));
}
