//! CLI integration tests for the trace analyzer
//!
//! These tests drive the compiled binary end to end on temporary capture
//! directories and validate flag handling, error surfacing and figure
//! output.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("uta").unwrap()
}

/// Write a small but well-formed capture into `dir`
fn write_capture(dir: &Path, name: &str) {
    let mut content = String::from("Time,Source,Destination\n");
    for i in 0..50 {
        let t = i as f64 * 0.004;
        content.push_str(&format!("{:.6},192.168.38.1,192.168.38.11\n", t));
        content.push_str(&format!("{:.6},192.168.38.11,192.168.38.1\n", t + 0.0002));
    }
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_hide_without_save_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "run1.csv");

    create_test_cmd()
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Nothing would be produced"));
}

#[test]
fn test_hide_without_save_writes_nothing() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "run1.csv");

    create_test_cmd()
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .assert()
        .failure();

    assert_eq!(fs::read_dir(figure_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_data_dir_is_a_data_error() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();

    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No .csv files were found"));

    assert_eq!(fs::read_dir(figure_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_one_figure_per_capture() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "trajectory1.csv");
    write_capture(data_dir.path(), "trajectory2.csv");
    fs::write(data_dir.path().join("README.txt"), "not a capture").unwrap();

    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Figures rendered: 2"));

    assert!(figure_dir.path().join("trajectory1.png").exists());
    assert!(figure_dir.path().join("trajectory2.png").exists());
    assert_eq!(fs::read_dir(figure_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_default_figure_dir_is_created() {
    let workspace = TempDir::new().unwrap();
    let data_dir = workspace.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    write_capture(&data_dir, "run1.csv");

    create_test_cmd()
        .current_dir(workspace.path())
        .arg("--save")
        .arg("--hide")
        .assert()
        .success();

    let figure_dir = workspace.path().join("figures");
    assert!(figure_dir.is_dir());
    assert!(figure_dir.join("run1.png").exists());
}

#[test]
fn test_malformed_capture_aborts_run() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("bad.csv"),
        "Time,Source,Destination\nnot-a-number,a,b\n",
    )
    .unwrap();

    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.csv"));
}

#[test]
fn test_invalid_endpoint_address_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "run1.csv");

    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--device-addr")
        .arg("not-an-address")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("device"));
}

#[test]
fn test_conflicting_color_flags_are_rejected() {
    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn test_endpoint_overrides_change_the_split() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "run1.csv");

    // With swapped endpoints nothing matches the default pair, so the
    // directional streams are empty but the run still succeeds with one
    // (empty) figure.
    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .arg("--device-addr")
        .arg("10.9.9.1")
        .arg("--controller-addr")
        .arg("10.9.9.2")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 status frames"));

    assert!(figure_dir.path().join("run1.png").exists());
}

#[test]
fn test_verbose_prints_series_summaries() {
    let data_dir = TempDir::new().unwrap();
    let figure_dir = TempDir::new().unwrap();
    write_capture(data_dir.path(), "run1.csv");

    create_test_cmd()
        .arg("--save")
        .arg("--hide")
        .arg("--verbose")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--figure-dir")
        .arg(figure_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("status jitter"))
        .stdout(predicate::str::contains("command delay"));
}

#[test]
fn test_help_mentions_all_flags() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--figure-dir"))
        .stdout(predicate::str::contains("--hide"))
        .stdout(predicate::str::contains("--save"))
        .stdout(predicate::str::contains("--device-addr"))
        .stdout(predicate::str::contains("--controller-addr"));
}
