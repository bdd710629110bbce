use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const TOKENS: [&str; 5] = ["--foo=bar", "--foo=baz", "--debug", "spring", "boot"];

fn make_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before UNIX_EPOCH")
        .as_nanos();
    let pid = std::process::id();
    let dir = std::env::temp_dir().join(format!("argscope-integ-{prefix}-{pid}-{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn argscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_argscope"))
}

#[test]
fn help_works() {
    let out = argscope()
        .arg("--help")
        .output()
        .expect("failed to run argscope --help");
    assert!(
        out.status.success(),
        "argscope --help failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("argscope") && stdout.contains("inspect") && stdout.contains("get"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn inspect_json_reports_classification() {
    let out = argscope()
        .arg("inspect")
        .arg("--json")
        .arg("--")
        .args(TOKENS)
        .output()
        .expect("failed to run argscope inspect");
    assert!(
        out.status.success(),
        "argscope inspect failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );

    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("inspect --json did not emit valid JSON");
    assert_eq!(report["source-args"], serde_json::json!(TOKENS));
    assert_eq!(report["option-names"], serde_json::json!(["foo", "debug"]));
    assert_eq!(report["options"]["foo"], serde_json::json!(["bar", "baz"]));
    assert_eq!(report["options"]["debug"], serde_json::json!([]));
    assert_eq!(report["options"].get("spring"), None);
    assert_eq!(report["non-option-args"], serde_json::json!(["spring", "boot"]));
}

#[test]
fn inspect_writes_report_file() {
    let dir = make_temp_dir("report");
    let output_path = dir.join("report.json");

    let out = argscope()
        .arg("inspect")
        .arg("--output")
        .arg(&output_path)
        .arg("--")
        .args(TOKENS)
        .output()
        .expect("failed to run argscope inspect");
    assert!(
        out.status.success(),
        "argscope inspect --output failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );

    let raw = fs::read(&output_path).expect("report file not written");
    let report: serde_json::Value =
        serde_json::from_slice(&raw).expect("report file is not valid JSON");
    assert_eq!(report["option-names"], serde_json::json!(["foo", "debug"]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn inspect_accepts_empty_token_stream() {
    let out = argscope()
        .arg("inspect")
        .arg("--json")
        .output()
        .expect("failed to run argscope inspect");
    assert!(out.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("inspect --json did not emit valid JSON");
    assert_eq!(report["source-args"], serde_json::json!([]));
    assert_eq!(report["option-names"], serde_json::json!([]));
    assert_eq!(report["non-option-args"], serde_json::json!([]));
}

#[test]
fn get_prints_values_in_order() {
    let out = argscope()
        .arg("get")
        .arg("foo")
        .arg("--")
        .args(TOKENS)
        .output()
        .expect("failed to run argscope get");
    assert!(
        out.status.success(),
        "argscope get failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "bar\nbaz\n");
}

#[test]
fn get_succeeds_silently_for_flag_options() {
    let out = argscope()
        .arg("get")
        .arg("debug")
        .arg("--")
        .args(TOKENS)
        .output()
        .expect("failed to run argscope get");
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "expected no values for a bare flag");
}

#[test]
fn get_fails_for_absent_options() {
    let out = argscope()
        .arg("get")
        .arg("spring")
        .arg("--")
        .args(TOKENS)
        .output()
        .expect("failed to run argscope get");
    assert!(
        !out.status.success(),
        "expected nonzero exit for an option that was never supplied"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("option not present: --spring"),
        "unexpected stderr:\n{stderr}"
    );
}
