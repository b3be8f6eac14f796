use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const REPORT: &str = r#"{
    "requestedUrl": "https://example.com/",
    "categories": {
        "accessibility": {"score": 1.0},
        "seo": {"score": 0.9},
        "performance": {"score": 0.93},
        "best-practices": {"score": 0.78}
    },
    "audits": {
        "total-blocking-time": {"title": "Total Blocking Time", "score": 0.62, "displayValue": "420 ms"},
        "first-contentful-paint": {"title": "First Contentful Paint", "score": 0.95, "displayValue": "1.1 s"},
        "speed-index": {"title": "Speed Index", "score": 0.88},
        "largest-contentful-paint": {"title": "Largest Contentful Paint", "score": 0.51, "displayValue": "3.4 s"},
        "cumulative-layout-shift": {"title": "Cumulative Layout Shift", "score": 1, "displayValue": "0"}
    }
}"#;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lighthouse-summary"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

fn dir_with_report(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lighthouse-after.report.json"), contents).unwrap();
    dir
}

#[test]
fn prints_summary_for_report_in_working_directory() {
    let dir = dir_with_report(REPORT);
    let output = run_in(dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "\
LIGHTHOUSE SCORES (PRODUCTION):
========================================
Performance: 93
Accessibility: 100
Best Practices: 78
SEO: 90

KEY METRICS:
========================================
First Contentful Paint: 1.1 s (score: 0.95)
Largest Contentful Paint: 3.4 s (score: 0.51)
Total Blocking Time: 420 ms (score: 0.62)
Cumulative Layout Shift: 0 (score: 1)
Speed Index: N/A (score: 0.88)
";
    assert_eq!(stdout, expected);
}

#[test]
fn missing_report_fails_with_non_zero_status() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lighthouse-after.report.json"));
}

#[test]
fn malformed_report_fails_with_non_zero_status() {
    let dir = dir_with_report("not json");
    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_audit_fails_after_partial_output() {
    let dir = dir_with_report(&REPORT.replace("\"speed-index\":", "\"speed-index-v2\":"));
    let output = run_in(dir.path());

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("LIGHTHOUSE SCORES (PRODUCTION):\n"));
    assert!(!stdout.contains("Speed Index"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("audits.speed-index"));
}

#[test]
fn repeated_runs_print_identical_output() {
    let dir = dir_with_report(REPORT);
    let first = run_in(dir.path());
    let second = run_in(dir.path());

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn null_metric_fields_print_as_none() {
    let report = REPORT.replace(
        r#""speed-index": {"title": "Speed Index", "score": 0.88}"#,
        r#""speed-index": {"title": null, "score": null, "displayValue": null}"#,
    );
    let dir = dir_with_report(&report);
    let output = run_in(dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("None: None (score: None)\n"));
}
