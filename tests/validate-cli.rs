use std::ffi::OsStr;
use std::path::Path;

use assert_cmd::{Command, assert::Assert};
use predicates::prelude::*;
use serde_json::Value;

mod stubs;

use stubs::config::{populate_root, render};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("cloudcore-config").unwrap();
    cmd.env_remove("CLOUDCORE_CONFIG");
    cmd
}

fn validate_assert(config_path: impl AsRef<OsStr>) -> Assert {
    cmd().arg("validate").arg("--config").arg(config_path).assert()
}

fn write_config(root: &Path, payload: &str) -> std::path::PathBuf {
    let path = root.join("cloudcore.json");
    std::fs::write(&path, render(payload, root)).unwrap();
    path
}

#[test]
fn valid_config_passes() {
    let tempdir = tempfile::tempdir().unwrap();
    populate_root(tempdir.path());
    let path = write_config(tempdir.path(), stubs::config::VALID_PAYLOAD);

    validate_assert(&path).success().stdout("");
}

#[test]
fn valid_config_json_output_is_empty_list() {
    let tempdir = tempfile::tempdir().unwrap();
    populate_root(tempdir.path());
    let path = write_config(tempdir.path(), stubs::config::VALID_PAYLOAD);

    cmd()
        .arg("validate")
        .arg("--json")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn invalid_config_fails_with_field_errors() {
    let tempdir = tempfile::tempdir().unwrap();
    populate_root(tempdir.path());
    let path = write_config(tempdir.path(), stubs::config::INVALID_PAYLOAD);

    validate_assert(&path)
        .failure()
        .stdout(predicate::str::contains(
            "modules.cloudHub.websocket.port: Invalid value: 70000: must be between 1 and 65535, inclusive",
        ))
        .stdout(predicate::str::contains("modules.cloudHub.tlsCertFile"))
        .stdout(predicate::str::contains("kubeconfig must be an absolute path"))
        .stderr(predicate::str::contains("5 error(s) found"));
}

#[test]
fn json_output_lists_errors() {
    let tempdir = tempfile::tempdir().unwrap();
    populate_root(tempdir.path());
    let path = write_config(tempdir.path(), stubs::config::INVALID_PAYLOAD);

    let output = cmd()
        .arg("validate")
        .arg("--json")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let errs: Value = serde_json::from_slice(&output.stdout).unwrap();
    let errs = errs.as_array().unwrap();
    assert_eq!(errs.len(), 5);
    assert_eq!(errs[2]["field"], "modules.cloudHub.websocket.port");
    assert_eq!(errs[2]["badValue"], 70000);
}

#[test]
fn config_path_taken_from_env() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(tempdir.path(), stubs::config::DISABLED_MODULES_PAYLOAD);

    cmd()
        .env("CLOUDCORE_CONFIG", &path)
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn missing_config_file_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    validate_assert(tempdir.path().join("nope.json"))
        .failure()
        .stderr(predicate::str::contains("could not read config file"));
}

#[test]
fn unparseable_config_fails() {
    let tempdir = tempfile::tempdir().unwrap();
    let path = write_config(tempdir.path(), stubs::config::INVALID_JSON);
    validate_assert(&path)
        .failure()
        .stderr(predicate::str::contains("could not parse config JSON"));
}

#[test]
fn defaultconfig_prints_all_modules() {
    let output = cmd().arg("defaultconfig").output().unwrap();
    assert!(output.status.success());

    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["modules"]["cloudHub"]["websocket"]["port"], 10000);
    assert!(config["modules"]["syncController"].is_object());
}

#[test]
fn minconfig_omits_optional_controllers() {
    let output = cmd().arg("minconfig").output().unwrap();
    assert!(output.status.success());

    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(config["modules"]["cloudHub"].is_object());
    assert!(config["modules"].get("deviceController").is_none());
    assert!(config["modules"].get("syncController").is_none());
}

#[test]
fn unknown_subcommand_fails() {
    cmd()
        .arg("start")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subcommand must be one of"));
}
