//! End-to-end tests of the fix-times binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("fix-times").unwrap()
}

fn write_body(dir: &Path, name: &str) -> std::path::PathBuf {
    let body = concat!(
        "8=FIX.4.2\u{1}35=8\u{1}38=100\u{1}10=123\u{1}",
        "8=FIX.4.2\u{1}35=0\u{1}10=045\u{1}",
        "8=FIX.4.2\u{1}35=8\u{1}38=250\u{1}10=201\u{1}",
    );
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn capture_writes_sample_set_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let body = write_body(dir.path(), "capture.body");

    cmd()
        .arg(&body)
        .arg("--dir")
        .arg(dir.path())
        .arg("--index")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("total qty:     350"))
        .stdout(predicate::str::contains("3 samples"));

    let samples = fs::read_to_string(dir.path().join("times-1.txt")).unwrap();
    assert_eq!(samples.lines().count(), 3);
    assert!(samples.lines().all(|l| l.parse::<u64>().is_ok()));
}

#[test]
fn index_defaults_to_three() {
    let dir = tempfile::tempdir().unwrap();
    let body = write_body(dir.path(), "capture.body");

    cmd()
        .arg(&body)
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("times-3.txt").exists());
}

#[test]
fn two_digit_index_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let body = write_body(dir.path(), "capture.body");

    cmd()
        .arg(&body)
        .arg("--dir")
        .arg(dir.path())
        .arg("--index")
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("single digit"));
}

#[test]
fn missing_body_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg(dir.path().join("missing.body"))
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to capture"));
}

#[test]
fn captured_sample_set_flows_into_the_normalizer() {
    let dir = tempfile::tempdir().unwrap();
    let body = write_body(dir.path(), "capture.body");

    cmd()
        .arg(&body)
        .arg("--dir")
        .arg(dir.path())
        .arg("--index")
        .arg("1")
        .assert()
        .success();

    // Parse timings can flatline to zero on coarse clocks, which the
    // normalizer rejects; pad the set so the total is always positive.
    let samples_path = dir.path().join("times-1.txt");
    let mut samples = fs::read_to_string(&samples_path).unwrap();
    samples.push_str("1000\n");
    fs::write(&samples_path, samples).unwrap();

    Command::cargo_bin("times-normalize")
        .unwrap()
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 series"));

    let plot = fs::read_to_string(dir.path().join("plot.gnu")).unwrap();
    assert!(plot.contains("plot \"times-1-normal.txt\" with lines\n"));
    assert!(dir.path().join("times-1-normal.txt").exists());
}
