//! Integration tests for the tags command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tagtrack_cmd;

#[test]
fn test_tags_no_markers_found() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.html"), "plain text").unwrap();

    tagtrack_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No markers found"));
}

#[test]
fn test_tags_lists_unique_literals_first_seen() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.html"), "[!b] [~b] [!a] [!b]").unwrap();

    let output = tagtrack_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["[!b]", "[~b]", "[!a]"]);
}

#[test]
fn test_tags_across_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.html"), "[!x]").unwrap();
    fs::write(temp.path().join("b.html"), "[!x] [~y]").unwrap();

    let output = tagtrack_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["[!x]", "[~y]"]);
}
