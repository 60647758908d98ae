//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a larder command with no inherited home or log settings
pub fn larder() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("larder"));
    cmd.env_remove("LARDER_HOME").env_remove("LARDER_LOG");
    cmd
}

/// Helper to get a larder command bound to a data directory
pub fn larder_in(home: &Path) -> Command {
    let mut cmd = larder();
    cmd.env("LARDER_HOME", home);
    cmd
}

/// Helper to create an empty data directory
pub fn setup_home() -> TempDir {
    TempDir::new().unwrap()
}

/// Helper to add items to the shopping list
pub fn add_items(home: &TempDir, names: &[&str]) {
    larder_in(home.path())
        .args(["list", "add"])
        .args(names)
        .assert()
        .success();
}

/// Helper to read the shopping list as JSON
pub fn list_json(home: &TempDir) -> Vec<serde_json::Value> {
    let output = larder_in(home.path())
        .args(["list", "show", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Names on the list, in order
pub fn list_names(home: &TempDir) -> Vec<String> {
    list_json(home)
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}
