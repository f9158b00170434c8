//! Config workflow integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn emeowtions_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("emeowtions").expect("binary exists");
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("EMEOWTIONS_API_URL")
        .env_remove("EMEOWTIONS_API_KEY");
    cmd
}

#[test]
fn init_creates_config_file() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created"));
}

#[test]
fn init_twice_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn set_then_get_round_trips() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "backend", "remote"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "get", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remote"));
}

#[test]
fn set_keeps_other_values() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "duration", "30s"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "set", "pet", "Whiskers"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "get", "duration"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30s"));
}

#[test]
fn get_unset_key_reports_not_set() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "get", "pet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn api_key_is_masked_on_get() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "api.key", "sk-meow-1234567890"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "get", "api.key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-m...7890"))
        .stdout(predicate::str::contains("sk-meow-1234567890").not());
}

#[test]
fn api_url_and_key_share_a_section() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "api.url", "https://api.emeowtions.dev"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "set", "api.key", "sk-meow-1234567890"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "get", "api.url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://api.emeowtions.dev"));
}

#[test]
fn list_shows_all_keys() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success();

    emeowtions_cmd(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backend"))
        .stdout(predicate::str::contains("duration"))
        .stdout(predicate::str::contains("extraction_timeout"))
        .stdout(predicate::str::contains("history_cap"))
        .stdout(predicate::str::contains("stub_delay_ms"))
        .stdout(predicate::str::contains("pet"))
        .stdout(predicate::str::contains("api.url"))
        .stdout(predicate::str::contains("api.key"));
}

#[test]
fn set_unknown_key_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn get_unknown_key_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "get", "color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn set_invalid_backend_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "backend", "cloud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn set_invalid_duration_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "extraction_timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn set_zero_history_cap_fails() {
    let dir = TempDir::new().expect("tempdir");

    emeowtions_cmd(&dir)
        .args(["config", "set", "history_cap", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
