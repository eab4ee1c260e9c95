use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn geoscatter() -> Command {
    let mut cmd = Command::cargo_bin("geoscatter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = geoscatter();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("geoscatter"))
        .stdout(predicate::str::contains("--xlim"));
}

#[test]
fn headless_run_with_stats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pts.csv");
    fs::write(&path, "longitude,latitude\n-100.0,40.0\n-200.0,10.0\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count=2"))
        .stdout(predicate::str::contains("visible=1"))
        .stdout(predicate::str::contains("lon=[-200, -100]"));
}

#[test]
fn axis_flags_accept_negative_ranges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pts.csv");
    fs::write(&path, "longitude,latitude\n-200.0,10.0\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless", "--stats", "--xlim", "-210:-190", "--ylim", "0:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visible=1"));
}

#[test]
fn missing_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    geoscatter()
        .arg(dir.path().join("absent.csv"))
        .args(["--display", "headless"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn missing_column_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "longitude,lat\n-100.0,40.0\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latitude"));
}

#[test]
fn oversized_canvas_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pts.csv");
    fs::write(&path, "longitude,latitude\n-100.0,40.0\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless", "--width", "100000", "--height", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 8192x8192"));
}

#[test]
fn failed_run_prints_no_stats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "longitude,latitude\n-100.0,40.0\n-90.0,north\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless", "--stats"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn na_markers_are_plotted_as_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("na.csv");
    fs::write(&path, "longitude,latitude\nNA,40.0\n-100.0,null\n-90.0,35.0\n").unwrap();

    geoscatter()
        .arg(&path)
        .args(["--display", "headless", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count=3 missing=2 visible=1"));
}

#[test]
fn invalid_config_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("pts.csv");
    fs::write(&data, "longitude,latitude\n-100.0,40.0\n").unwrap();
    let cfg = dir.path().join("plot.json");
    fs::write(&cfg, r#"{ "marker": { "alpha": 3.0 } }"#).unwrap();

    geoscatter()
        .arg(&data)
        .arg("--config")
        .arg(&cfg)
        .args(["--display", "headless"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alpha"));
}
