//! Binary-level tests for the `ctop` command line

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn ctop() -> Command {
    let mut cmd = Command::cargo_bin("ctop").unwrap();
    cmd.env_remove("CTOP_CONFIG");
    cmd
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_help_lists_flags() {
    ctop()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    ctop()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_show_reads_file() {
    let file = config_file("docker_bin = \"podman\"\npoll_interval_secs = 4\n");

    ctop()
        .arg("--config")
        .arg(file.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker_bin = \"podman\""))
        .stdout(predicate::str::contains("poll_interval_secs = 4"))
        .stdout(predicate::str::contains("show_all = false"));
}

#[test]
fn test_flags_override_file() {
    let file = config_file("poll_interval_secs = 4\n");

    ctop()
        .arg("--config")
        .arg(file.path())
        .args(["-a", "-i", "10", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("poll_interval_secs = 10"))
        .stdout(predicate::str::contains("show_all = true"));
}

#[test]
fn test_config_path_echoes_explicit_path() {
    let file = config_file("");
    let path = file.path().display().to_string();

    ctop()
        .arg("--config")
        .arg(file.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path));
}

#[test]
fn test_invalid_config_fails() {
    let file = config_file("show_all = = true\n");

    ctop()
        .arg("--config")
        .arg(file.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file is invalid"));
}

#[test]
fn test_config_path_works_with_broken_file() {
    let file = config_file("show_all = = true\n");
    let path = file.path().display().to_string();

    ctop()
        .arg("--config")
        .arg(file.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path));
}

#[test]
fn test_zero_interval_rejected() {
    ctop()
        .args(["--interval", "0", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--interval"));
}
