//! Integration tests for the CLI interface

mod common;

use assert_cmd::Command;
use common::{knows_pair, TestContext};
use edgecopy::graph::Direction;
use predicates::prelude::*;

fn edgecopy() -> Command {
    let mut cmd = Command::cargo_bin("edgecopy").unwrap();
    cmd.env_remove("EDGECOPY_DIRECTION")
        .env_remove("EDGECOPY_MAP_TASKS")
        .env_remove("EDGECOPY_REDUCE_TASKS");
    cmd
}

#[test]
fn test_cli_help_flag() {
    edgecopy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_run_writes_output_and_counters() {
    let ctx = TestContext::new().unwrap();
    let input = ctx.write_input("input.jsonl", &knows_pair()).unwrap();
    let output = ctx.file("output.jsonl");
    let counters = ctx.file("counters.json");

    edgecopy()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--counters")
        .arg(&counters)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 OUT edges"));

    let vertices = ctx.read_output("output.jsonl").unwrap();
    assert_eq!(vertices.len(), 2);
    assert_eq!(vertices[1].edge_count(Direction::In), 1);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&counters).unwrap()).unwrap();
    assert_eq!(json["edges_copied"], 1);
    assert_eq!(json["edges_added"], 1);
}

#[test]
fn test_run_rejects_both_direction() {
    let ctx = TestContext::new().unwrap();
    let input = ctx.write_input("input.jsonl", &knows_pair()).unwrap();

    edgecopy()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(ctx.file("output.jsonl"))
        .arg("--direction")
        .arg("both")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BOTH is not supported"));

    assert!(!ctx.file("output.jsonl").exists());
}

#[test]
fn test_run_missing_input() {
    let ctx = TestContext::new().unwrap();

    edgecopy()
        .arg("run")
        .arg("--input")
        .arg(ctx.file("missing.jsonl"))
        .arg("--output")
        .arg(ctx.file("output.jsonl"))
        .assert()
        .code(4);
}

#[test]
fn test_run_reports_bad_line() {
    let ctx = TestContext::new().unwrap();
    let input = ctx.write_text("input.jsonl", "{\"id\":1}\nnot json\n").unwrap();

    edgecopy()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(ctx.file("output.jsonl"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_validate_config_file() {
    let ctx = TestContext::new().unwrap();
    let config = ctx
        .write_text("edgecopy.toml", "[edge_copy]\ndirection = \"in\"\n")
        .unwrap();

    edgecopy()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("direction=IN"));
}

#[test]
fn test_validate_env_override() {
    edgecopy()
        .env("EDGECOPY_DIRECTION", "both")
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BOTH is not supported"));
}

#[test]
fn test_unknown_direction_is_usage_error() {
    edgecopy()
        .args(["validate", "--direction", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn test_missing_config_file_is_config_error() {
    let ctx = TestContext::new().unwrap();

    edgecopy()
        .arg("validate")
        .arg("--config")
        .arg(ctx.file("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}
