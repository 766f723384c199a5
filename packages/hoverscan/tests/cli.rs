//! Integration tests for the CLI commands

mod common;

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version_command() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("hoverscan "));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("hoverscan "));
}

#[test]
fn test_catalog_lists_builtin_parts() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.arg("catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3\t003456\tФильтр"))
        .stdout(predicate::str::contains("16\t016789\tРемень привода"));
}

#[test]
fn test_lookup_by_code() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.args(["lookup", "005678"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ID: 5"))
        .stdout(predicate::str::contains("Название: Корпус"));
}

#[test]
fn test_lookup_miss_exits_nonzero() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.args(["lookup", "999999"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("no catalog entry"));
}

#[test]
fn test_map_prints_rectangle() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.args([
        "map",
        "--x",
        "100",
        "--y",
        "100",
        "--natural-width",
        "800",
        "--natural-height",
        "600",
        "--display-width",
        "400",
        "--display-height",
        "300",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"left":160.0,"top":160.0,"width":80.0,"height":80.0}"#,
    ));
}

#[test]
fn test_missing_catalog_file_fails() {
    let mut cmd = cargo_bin_cmd!("hoverscan");
    cmd.args(["catalog", "--catalog", "/nonexistent/catalog.json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}

#[cfg(unix)]
#[test]
fn test_hover_reports_match_then_idle() {
    let dir = common::scratch_dir("cli-hover");
    let image = dir.join("parts.png");
    std::fs::write(&image, common::blank_png(100, 100)).unwrap();
    let tesseract = common::fake_tesseract(&dir, "003456");

    let mut child = Command::new(env!("CARGO_BIN_EXE_hoverscan"))
        .args(["hover", "--image"])
        .arg(&image)
        .arg("--tesseract")
        .arg(&tesseract)
        .args(["--display-width", "100", "--display-height", "100", "--throttle-ms", "50"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    writeln!(stdin, "50 50").unwrap();
    stdin.flush().unwrap();
    std::thread::sleep(Duration::from_millis(1500));
    // Past the bottom-right corner: nothing left to read.
    writeln!(stdin, "200 200").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    std::fs::remove_dir_all(&dir).ok();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let lines: Vec<&str> = stdout.lines().collect();
    let shown = lines
        .iter()
        .position(|l| l.contains(r#""command":"show_popup""#) && l.contains(r#""id":"3""#))
        .unwrap_or_else(|| panic!("no popup in {stdout}"));
    let hidden = lines
        .iter()
        .position(|l| *l == r#"{"command":"hide_popup"}"#)
        .unwrap_or_else(|| panic!("no hide in {stdout}"));
    assert!(shown < hidden, "popup must show before it hides: {stdout}");
    assert!(lines.contains(&r#"{"command":"highlight","id":"3"}"#));
}

#[test]
fn test_hover_missing_image_fails_while_stdin_open() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hoverscan"))
        .args(["hover", "--image", "/nonexistent/parts.png"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Keep stdin open: the command must not wait for EOF to report the failure.
    let stdin = child.stdin.take().unwrap();
    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break Some(status);
        }
        if Instant::now() > deadline {
            break None;
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    drop(stdin);

    let Some(status) = status else {
        child.kill().ok();
        panic!("hover kept waiting on stdin after the image failed to load");
    };
    assert!(!status.success());

    let output = child.wait_with_output().unwrap();
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read source image"));
}
