use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn prbuild() -> assert_cmd::Command {
    cargo_bin_cmd!("prbuild")
}

// ── Help / Version ──

#[test]
fn shows_help() {
    prbuild()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OBS package counterpart"));
}

#[test]
fn shows_version() {
    prbuild()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prbuild"));
}

#[test]
fn build_help_documents_descriptor_format() {
    prbuild()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_org:base_project"));
}

// ── Build Command: descriptor validation ──

#[test]
fn build_rejects_short_descriptor() {
    let tmp = TempDir::new().unwrap();

    prbuild()
        .current_dir(tmp.path())
        .args(["build", "openSUSE:libzypp:master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("descriptor"));

    // Parsing fails before any pipeline step runs
    assert!(!tmp.path().join("git_src").exists());
    assert!(!tmp.path().join("obs_src").exists());
}

#[test]
fn build_rejects_descriptor_with_extra_fields() {
    let tmp = TempDir::new().unwrap();

    prbuild()
        .current_dir(tmp.path())
        .args(["build", "a:b:c:d:e:f:g"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("6 colon-separated fields"));
}

#[test]
fn failing_checkout_halts_pipeline() {
    let tmp = TempDir::new().unwrap();

    // With an empty PATH the metadata checkout cannot spawn osc; nothing
    // after that step may run
    prbuild()
        .current_dir(tmp.path())
        .env("PATH", "")
        .args(["build", "openSUSE:libzypp:master:42:fork/libzypp:abcdef1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("osc"));

    assert!(!tmp.path().join("git_src").exists());
    assert!(!tmp.path().join("obs_src").exists());
}

#[test]
fn build_fails_on_invalid_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("prbuild.toml"), "not valid {{{{ toml").unwrap();

    prbuild()
        .current_dir(tmp.path())
        .args(["build", "openSUSE:libzypp:master:42:fork/libzypp:abcdef1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}
