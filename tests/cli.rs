//! End-to-end tests for the `secondbrain-home` binary

use secondbrain_home::report::digest_hex;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PNG_STUB: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
const SVG_STUB: &[u8] = b"<svg id=\"abc\"></svg>";

fn asset_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("logo.png"), PNG_STUB).unwrap();
    fs::write(dir.path().join("demo.svg"), SVG_STUB).unwrap();
    dir
}

/// Config file naming the stub assets, pointed at `asset_dir`
fn write_config(dir: &Path, asset_dir: &Path) -> std::path::PathBuf {
    let path = dir.join("render.json");
    let config = serde_json::json!({
        "asset_dir": asset_dir,
        "logo_file": "logo.png",
        "demo_file": "demo.svg",
    });
    fs::write(&path, config.to_string()).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_secondbrain-home"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run secondbrain-home")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn test_asset_dir_flag_overrides_config() {
    let assets = asset_dir();
    let work = tempfile::tempdir().unwrap();
    let empty = work.path().join("empty");
    fs::create_dir(&empty).unwrap();
    let config = write_config(work.path(), &empty);
    let out = work.path().join("index.html");

    let output = run(&["--config", arg(&config), "--asset-dir", arg(assets.path()), "render", "--out", arg(&out)]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("data:image/").count(), 2);
}

#[test]
fn test_config_alone_is_used_without_flags() {
    let assets = asset_dir();
    let work = tempfile::tempdir().unwrap();
    let config = write_config(work.path(), assets.path());

    let output = run(&["--config", arg(&config), "render"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_fragments_flag_writes_bare_markup() {
    let assets = asset_dir();
    let work = tempfile::tempdir().unwrap();
    let config = write_config(work.path(), assets.path());
    let out = work.path().join("fragments.html");

    let output = run(&["--config", arg(&config), "render", "--fragments", "--out", arg(&out)]);
    assert!(output.status.success());

    let markup = fs::read_to_string(&out).unwrap();
    assert!(!markup.contains("<!DOCTYPE html>"));
    assert!(markup.trim_start().starts_with("<style>"));
    assert!(markup.contains("cta-section"));
}

#[test]
fn test_report_is_json_on_stderr_matching_output() {
    let assets = asset_dir();
    let work = tempfile::tempdir().unwrap();
    let config = write_config(work.path(), assets.path());
    let out = work.path().join("index.html");

    let output = run(&["--config", arg(&config), "render", "--out", arg(&out), "--report"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let report: serde_json::Value = serde_json::from_str(stderr.trim()).expect("report json");
    let written = fs::read_to_string(&out).unwrap();

    assert_eq!(report["sha256"], digest_hex(&written));
    assert_eq!(report["output_bytes"], written.len());
    assert_eq!(report["fragments"].as_array().map(Vec::len), Some(5));
    assert_eq!(report["assets"][1]["media_type"], "image/svg+xml");
    assert_eq!(report["assets"][1]["encoded_len"], 28);
}

#[test]
fn test_missing_asset_dir_exits_with_status_one() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("does-not-exist");
    let out = work.path().join("index.html");

    let output = run(&["--asset-dir", arg(&missing), "render", "--out", arg(&out)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("secondbrain-home:"));
    assert!(!out.exists());
}
