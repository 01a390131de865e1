use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Command isolated from any user config file
fn netview(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("netview");
    cmd.env("NETVIEW_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|l| l.trim().to_string())
        .collect()
}

#[test]
fn test_address_group_table() {
    let dir = TempDir::new().unwrap();
    let output = netview(&dir)
        .arg("address-group")
        .arg(fixture("address_group_list.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[0].contains("POD-IPS") && lines[0].contains("NODE-IPS"));
    assert!(lines[1].starts_with("a-group"));
    assert!(lines[1].contains("192.168.1.10, fd00::10"));
    assert!(lines[2].starts_with("b-group"));
    assert!(lines[2].contains("10.10.0.2,10.10.0.1"));
    assert!(lines[3].starts_with("c-group"));
}

#[test]
fn test_network_policy_json_sorted_by_creation_timestamp() {
    let dir = TempDir::new().unwrap();
    let output = netview(&dir)
        .args(["network-policy", "--sort-by", "CreationTimestamp", "--output", "json"])
        .arg(fixture("network_policy_list.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["metadata"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["np-c", "np-b", "np-a"]);
}

#[test]
fn test_single_object_from_stdin() {
    let dir = TempDir::new().unwrap();
    let input = std::fs::read_to_string(fixture("address_group.json")).unwrap();

    netview(&dir)
        .args(["ag", "--single", "--output", "json"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"name\": \"solo\""))
        .stdout(predicate::str::contains("10.20.0.7"));
}

#[test]
fn test_wrong_kind_fails() {
    let dir = TempDir::new().unwrap();
    netview(&dir)
        .arg("address-group")
        .arg(fixture("network_policy_list.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unexpected resource kind"));
}

#[test]
fn test_malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    netview(&dir)
        .arg("network-policy")
        .write_stdin("{\"items\": [")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decode error"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    netview(&dir)
        .arg("network-policy")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input"));
}

#[test]
fn test_empty_list_reports_no_resources() {
    let dir = TempDir::new().unwrap();
    netview(&dir)
        .arg("network-policy")
        .write_stdin(r#"{"kind": "NetworkPolicyList", "items": []}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No resources found."));
}

#[test]
fn test_config_file_selects_output_and_width() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "output = \"table\"\nmax_column_width = 9\n",
    )
    .unwrap();

    netview(&dir)
        .arg("np")
        .arg(fixture("network_policy_list.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("atg-db + 1 more..."));
}

#[test]
fn test_flag_overrides_config_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "output = \"table\"\n").unwrap();

    netview(&dir)
        .args(["np", "--output", "json"])
        .arg(fixture("network_policy_list.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}
