//! CLI Export Tests
//!
//! Runs the `lcd-explainer` binary against temporary output directories.

use std::fs;
use std::process::Command;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lcd-explainer"));
    cmd.args(["--log-level", "warn"]);
    cmd
}

/// A small range produces one parseable file per frame.
#[test]
fn exports_a_frame_range() {
    let dir = tempfile::tempdir().unwrap();
    let status = cli()
        .arg(dir.path())
        .args(["--from", "88", "--to", "92"])
        .status()
        .unwrap();
    assert!(status.success());

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "frame_00088.json",
            "frame_00089.json",
            "frame_00090.json",
            "frame_00091.json"
        ]
    );

    let json = fs::read_to_string(dir.path().join("frame_00090.json")).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(tree["type"], "group");
}

/// `--frame` exports exactly one file, pretty-printed on request.
#[test]
fn exports_a_single_pretty_frame() {
    let dir = tempfile::tempdir().unwrap();
    let status = cli()
        .arg(dir.path())
        .args(["--frame", "450", "--pretty"])
        .status()
        .unwrap();
    assert!(status.success());

    let json = fs::read_to_string(dir.path().join("frame_00450.json")).unwrap();
    assert!(json.contains('\n'));
    assert!(json.contains("VA Panel"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

/// A config file replaces the default segment table.
#[test]
fn honors_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("video.json");
    fs::write(
        &config,
        r##"{ "duration_frames": 90, "segments": [ { "scene": "comparison", "start": 0, "duration": 90 } ] }"##,
    )
    .unwrap();
    let out = dir.path().join("frames");

    let status = cli()
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .args(["--frame", "60"])
        .status()
        .unwrap();
    assert!(status.success());
    let json = fs::read_to_string(out.join("frame_00060.json")).unwrap();
    assert!(json.contains("Comparison Summary"));
}

/// Invalid configs and empty ranges fail with a non-zero exit code.
#[test]
fn reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.json");
    fs::write(&config, r##"{ "background": "not a color" }"##).unwrap();

    let bad_config = cli()
        .arg(dir.path().join("out"))
        .arg("--config")
        .arg(&config)
        .status()
        .unwrap();
    assert!(!bad_config.success());

    let empty = cli()
        .arg(dir.path().join("out"))
        .args(["--from", "10", "--to", "10"])
        .status()
        .unwrap();
    assert!(!empty.success());
}

/// Frame numbers at the edge of `i64` are refused instead of overflowing.
#[test]
fn rejects_overflowing_ranges() {
    let dir = tempfile::tempdir().unwrap();

    let last_frame = cli()
        .arg(dir.path())
        .args(["--frame", &i64::MAX.to_string()])
        .output()
        .unwrap();
    assert_eq!(last_frame.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&last_frame.stderr).contains("out of range"));

    let huge = cli()
        .arg(dir.path())
        .arg(format!("--from={}", i64::MIN))
        .args(["--to", "10"])
        .output()
        .unwrap();
    assert_eq!(huge.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&huge.stderr).contains("too large"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
