//! End-to-end runs of the tagfinder binary

use crate::common::{create_tree, licensed_project, EXAMPLE_C};
use std::process::Command;
use tagfinder::scanner::api::Tag;

fn tagfinder() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tagfinder"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_binary_json_output_over_tree() {
    let project = licensed_project();

    let output = tagfinder()
        .args(["--output", "json", "--lines", "100"])
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let tags: Vec<Tag> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tags.len(), 6);
}

#[test]
fn test_binary_text_output_prints_progress_line() {
    let dir = create_tree(&[("example.c", EXAMPLE_C)]);

    let output = tagfinder()
        .args(["--threads", "2", "--lines", "100"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("with 2 threads, max 100 lines"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("DOCUMENTATION"));
    assert!(stdout.contains("2 tags found"));
}

#[test]
fn test_binary_single_file_mode() {
    let dir = create_tree(&[("example.c", EXAMPLE_C)]);

    let output = tagfinder()
        .args(["--file", "--lines", "1", "-o", "json"])
        .arg(dir.path().join("example.c"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let tags: Vec<Tag> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tags, vec![Tag::new("FileType", "DOCUMENTATION")]);
}

#[test]
fn test_binary_fails_on_file_root() {
    let dir = create_tree(&[("example.c", EXAMPLE_C)]);

    let output = tagfinder()
        .arg(dir.path().join("example.c"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
