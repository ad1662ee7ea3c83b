//! Integration tests for CLI infrastructure

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use formdoc_testkit::{temp_dir_in_workspace, write_fixture};
use predicates::prelude::*;
use std::process::Command;

fn formdoc() -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.env_remove("FORMDOC_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version_flag() {
    formdoc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formdoc"));
}

#[test]
fn test_cli_help_flag() {
    formdoc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_unknown_template_fails() {
    let temp = temp_dir_in_workspace();

    formdoc()
        .args(["show", "nao-existe"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: TEMPLATE_NOT_FOUND: template 'nao-existe' not found",
        ));
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp = temp_dir_in_workspace();
    write_fixture(temp.path(), "formdoc.toml", "[templates]\nbuiltin = \"sim\"\n");

    formdoc()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID"));
}

#[test]
fn test_cli_config_flag_overrides_lookup() {
    let temp = temp_dir_in_workspace();
    let config = write_fixture(
        &temp.path().join("conf"),
        "outro.toml",
        "[templates]\nbuiltin = false\n",
    );

    formdoc()
        .arg("list")
        .arg("--config")
        .arg(&config)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates available"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp = temp_dir_in_workspace();

    let assert = formdoc()
        .args(["--verbose", "data", "procuracao-pf"])
        .current_dir(temp.path())
        .assert()
        .success();

    // stdout stays valid JSON even with debug logging enabled
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    serde_json::from_str::<serde_json::Value>(&stdout).expect("Output should be valid JSON");
}
