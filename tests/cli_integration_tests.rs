#![allow(deprecated)] // cargo_bin deprecation - still works fine

mod common;

use assert_cmd::Command;
use common::TestFixture;
use predicates::prelude::*;

fn cmd(fixture: &TestFixture) -> Command {
    let mut c = Command::cargo_bin("modtrack").expect("binary should exist");
    c.current_dir(fixture.path());
    c
}

#[test]
fn scan_empty_project_succeeds() {
    let fixture = TestFixture::new();

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 0 files"));
}

#[test]
fn scan_reports_added_files() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);
    fixture.create_module("app.main", "hmod", &["app.core"]);

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 2 files (+2 added, -0 removed)"))
        .stdout(predicate::str::contains("Pending load order: app.core app.main"));
}

#[test]
fn second_scan_reports_no_changes() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success();

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(+0 added, -0 removed)"));
}

#[test]
fn scan_warns_about_mismatched_file_on_stderr() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);
    fixture.create_file("copy.hmod", "module app.core\n");

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 1 files"))
        .stderr(predicate::str::contains("copy.hmod"))
        .stderr(predicate::str::contains("inconsistent with its path"));
}

#[test]
fn scan_respects_platform_flag() {
    let fixture = TestFixture::new();
    fixture.create_module("a", "hmod", &[]);
    fixture.create_module("b", "smod", &[]);

    cmd(&fixture)
        .args(["scan", ".", "--no-config", "--platform", "script"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 1 files"));
}

#[test]
fn scan_uses_config_dirs_and_platform() {
    let fixture = TestFixture::new();
    fixture.create_file("src/core.smod", "module core\n");
    fixture.create_file("other/ignored.smod", "module ignored\n");
    fixture.create_file(".modtrack.toml", "dirs = [\"src\"]\nplatform = \"script\"\n");

    cmd(&fixture)
        .args(["scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 1 files"));
}

#[test]
fn scan_falls_back_to_search_path_env() {
    let fixture = TestFixture::new();
    fixture.create_file("deep/core.hmod", "module core\n");

    cmd(&fixture)
        .args(["scan", "--no-config", "--no-state"])
        .env("MODTRACK_PATH", fixture.path().join("deep"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 1 files"));
}

#[test]
fn status_shows_saved_snapshot() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);

    cmd(&fixture)
        .args(["scan", ".", "--no-config"])
        .assert()
        .success();

    cmd(&fixture)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracked files: 1"))
        .stdout(predicate::str::contains("core.hmod"));
}

#[test]
fn no_state_scan_leaves_no_snapshot_behind() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);

    cmd(&fixture)
        .args(["scan", ".", "--no-config", "--no-state"])
        .assert()
        .success();

    cmd(&fixture)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracked files: 0"));
}

#[test]
fn scan_excludes_glob_patterns() {
    let fixture = TestFixture::new();
    fixture.create_module("app.core", "hmod", &[]);
    fixture.create_file("out/app/core.hmod", "module app.core\n");

    cmd(&fixture)
        .args(["scan", ".", "--no-config", "-x", "**/out/**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracking 1 files"));
}

#[test]
fn init_writes_starter_config() {
    let fixture = TestFixture::new();

    cmd(&fixture)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    assert!(fixture.path().join(".modtrack.toml").is_file());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_file(".modtrack.toml", "dirs = []\n");

    cmd(&fixture)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_exclude_pattern_exits_with_config_error() {
    let fixture = TestFixture::new();

    cmd(&fixture)
        .args(["scan", ".", "--no-config", "-x", "["])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}
