//! Integration tests for dirmap


use assert_cmd::Command;
use harness::{FILE_LIST, TREE, TestDir, file_list, root_name, run_dirmap, tree};
use predicates::prelude::*;

#[test]
fn test_basic_reports() {
    let dir = TestDir::new();
    dir.add_file("a/f.txt", "f");
    dir.add_file("b.txt", "b");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should succeed");
    assert!(stdout.contains("Done!"), "should report completion: {}", stdout);

    // The list is opened before the walk, so it lists itself.
    assert_eq!(file_list(dir.path()), vec!["a/f.txt", "all_files.txt", "b.txt"]);

    let expected = format!(
        "{}/\n├── a/\n│   └── f.txt\n├── all_files.txt\n├── b.txt\n└── directory_tree.txt\n",
        root_name(dir.path())
    );
    assert_eq!(tree(dir.path()), expected);
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);

    assert_eq!(file_list(dir.path()), vec![FILE_LIST]);
    let expected = format!(
        "{}/\n├── all_files.txt\n└── directory_tree.txt\n",
        root_name(dir.path())
    );
    assert_eq!(tree(dir.path()), expected);
}

#[test]
fn test_git_dir_excluded_from_both_reports() {
    let dir = TestDir::new();
    dir.add_git_dir();
    dir.add_file("src/main.rs", "fn main() {}");
    dir.add_file("vendor/.git/HEAD", "nested");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);

    for line in file_list(dir.path()) {
        assert!(
            !line.split('/').any(|c| c == ".git"),
            "file list leaked .git: {}",
            line
        );
    }
    for line in tree(dir.path()).lines() {
        assert!(!line.contains(".git"), "tree leaked .git: {}", line);
    }
}

#[test]
fn test_second_run_is_stable() {
    let dir = TestDir::new();
    dir.add_file("docs/guide.md", "");
    dir.add_file("src/lib.rs", "");

    // The first run creates the reports; from then on the tree is unchanged.
    assert!(run_dirmap(dir.path(), &[]).2);
    assert!(run_dirmap(dir.path(), &[]).2);
    let second = tree(dir.path());
    assert!(run_dirmap(dir.path(), &[]).2);
    assert_eq!(tree(dir.path()), second);
}

#[test]
fn test_directories_sorted_before_files() {
    let dir = TestDir::new();
    dir.add_file("aaa.txt", "");
    dir.add_file("zzz/inner.txt", "");

    assert!(run_dirmap(dir.path(), &[]).2);
    let text = tree(dir.path());
    let dir_pos = text.find("zzz/").expect("should have zzz/");
    let file_pos = text.find("aaa.txt").expect("should have aaa.txt");
    assert!(dir_pos < file_pos, "directory should come first:\n{}", text);
}

#[test]
fn test_summary_printed() {
    let dir = TestDir::new();
    dir.add_file("one.txt", "");
    dir.add_file("two/three.txt", "");

    Command::cargo_bin("dirmap")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating file list..."))
        .stdout(predicate::str::contains("Generating directory tree..."))
        .stdout(predicate::str::contains(format!("saved to: {}", FILE_LIST)))
        .stdout(predicate::str::contains(format!("saved to: {}", TREE)))
        .stdout(predicate::str::contains("3 files listed; 1 directories, 4 files"));
}

#[test]
fn test_rejects_positional_arguments() {
    let dir = TestDir::new();
    Command::cargo_bin("dirmap")
        .unwrap()
        .current_dir(dir.path())
        .arg("somewhere")
        .assert()
        .failure();
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("dirmap")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirmap"));
}
