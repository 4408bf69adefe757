//! End-to-end tests for the codecoach binary.

mod common;

use assert_cmd::Command;
use common::{Project, GUI_APP, NET_WORKER};
use serde_json::Value;
use std::fs;

fn codecoach() -> Command {
    let mut cmd = Command::cargo_bin("codecoach").unwrap();
    cmd.env_remove("CODECOACH_CONFIG").env_remove("CODECOACH_LOG");
    cmd
}

#[test]
fn test_json_output_is_valid() {
    let project = Project::new()
        .with_file("app.py", GUI_APP)
        .with_file("net_worker.py", NET_WORKER);

    let output = codecoach()
        .current_dir(project.root())
        .args(["analyze", ".", "--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["summary"]["files_analyzed"], 2);
    assert!(json["concepts"].as_array().is_some_and(|c| !c.is_empty()));
    assert!(json["skills_summary"]["headline"].is_string());
}

#[test]
fn test_output_file_and_markdown() {
    let project = Project::new().with_file("app.py", GUI_APP);
    let report_path = project.dir.path().join("report.md");

    codecoach()
        .current_dir(project.root())
        .args(["analyze", "app.py", "--format", "markdown", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let text = fs::read_to_string(&report_path).unwrap();
    assert!(text.starts_with("# Learning Report"));
    assert!(text.contains("GUI Programming"));
    assert!(!text.contains('\u{1b}'), "file output must not contain color codes");
}

#[test]
fn test_resume_format() {
    let project = Project::new().with_file("app.py", GUI_APP);
    let output = codecoach()
        .current_dir(project.root())
        .args(["analyze", ".", "--format", "resume", "--no-interview"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.lines().any(|l| l.starts_with("skills.headline: ")));
    assert!(!text.contains("interview.1.question"));
}

#[test]
fn test_no_python_files_fails() {
    let project = Project::new().with_file("notes.txt", "nothing here\n");
    let output = codecoach()
        .current_dir(project.root())
        .args(["analyze", "."])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No analyzable Python files"), "{stderr}");
}

#[test]
fn test_init_creates_config_once() {
    let project = Project::new();

    codecoach()
        .current_dir(project.root())
        .arg("init")
        .assert()
        .success();
    assert!(project.dir.path().join(".codecoach.toml").exists());

    codecoach()
        .current_dir(project.root())
        .arg("init")
        .assert()
        .failure();

    codecoach()
        .current_dir(project.root())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_file_sets_default_format() {
    let project = Project::new()
        .with_file("app.py", GUI_APP)
        .with_file(".codecoach.toml", "[output]\ndefault_format = \"json\"\n");

    let output = codecoach()
        .current_dir(project.root())
        .args(["analyze", "."])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(serde_json::from_slice::<Value>(&output.stdout).is_ok());
}
