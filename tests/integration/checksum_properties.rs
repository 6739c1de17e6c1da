//! Integration tests for checksum determinism and sensitivity

use super::test_utils::{populate_sample_tree, write_file};
use dirsum::tree::hasher::compute_bytes_digest;
use dirsum::tree::{Checksum, DirectoryChecksum, WalkerConfig};
use std::fs;
use tempfile::TempDir;

fn checksum_of(root: &std::path::Path) -> Checksum {
    DirectoryChecksum::new(root.to_path_buf()).compute().unwrap()
}

fn sorted_lines(root: &std::path::Path) -> Vec<(String, String)> {
    let (records, _) = DirectoryChecksum::new(root.to_path_buf())
        .records()
        .unwrap();
    let mut lines: Vec<_> = records
        .into_iter()
        .map(|r| (r.relative_path.clone(), r.digest_hex()))
        .collect();
    lines.sort();
    lines
}

/// Single file scenario: the checksum equals the lone file digest
#[test]
fn test_single_file_scenario() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "data/a.txt", b"hi");

    let (records, checksum) = DirectoryChecksum::new(temp_dir.path().to_path_buf())
        .records()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].relative_path, "data/a.txt");
    assert_eq!(
        records[0].digest_hex(),
        "2acd4afef33a0b82bb1f72f67b7c42ea0aa13af12dab24327c7c5f66a86af2d7"
    );
    assert_eq!(checksum.to_hex(), records[0].digest_hex());
}

/// Same tree, same checksum and same set of lines
#[test]
fn test_determinism() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());

    assert_eq!(checksum_of(temp_dir.path()), checksum_of(temp_dir.path()));
    assert_eq!(sorted_lines(temp_dir.path()), sorted_lines(temp_dir.path()));
}

/// Sorted and filesystem-order listings agree on the checksum
#[test]
fn test_listing_order_does_not_matter() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());
    for name in ["zeta", "alpha", "mid", "Beta"] {
        write_file(temp_dir.path(), &format!("{}/file.txt", name), name.as_bytes());
    }

    let sorted = DirectoryChecksum::new(temp_dir.path().to_path_buf())
        .with_walker_config(WalkerConfig {
            sort_by_name: true,
            ..WalkerConfig::default()
        })
        .compute()
        .unwrap();

    assert_eq!(sorted, checksum_of(temp_dir.path()));
}

/// Equal trees at different locations give equal checksums
#[test]
fn test_checksum_independent_of_root_location() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    populate_sample_tree(first.path());
    populate_sample_tree(&second.path().join("deeper").join("copy"));

    assert_eq!(
        checksum_of(first.path()),
        checksum_of(&second.path().join("deeper").join("copy"))
    );
}

/// Hidden files and directories anywhere leave the checksum untouched
#[test]
fn test_hidden_entries_excluded() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());
    let before = checksum_of(temp_dir.path());
    let lines_before = sorted_lines(temp_dir.path());

    write_file(temp_dir.path(), ".hidden_file", b"secret");
    write_file(temp_dir.path(), "data/.cache/entry", b"cached");
    write_file(temp_dir.path(), "data/nested/.swp", b"swap");

    assert_eq!(checksum_of(temp_dir.path()), before);
    assert_eq!(sorted_lines(temp_dir.path()), lines_before);
}

/// A single changed byte changes the checksum
#[test]
fn test_content_sensitivity() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());
    let before = checksum_of(temp_dir.path());

    write_file(temp_dir.path(), "data/nested/b.bin", &[0u8, 1, 2, 3, 254]);

    assert_ne!(checksum_of(temp_dir.path()), before);
}

/// Renaming a file with unchanged contents changes the checksum
#[test]
fn test_path_sensitivity() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());
    let before = checksum_of(temp_dir.path());

    fs::rename(
        temp_dir.path().join("data").join("a.txt"),
        temp_dir.path().join("data").join("renamed.txt"),
    )
    .unwrap();

    assert_ne!(checksum_of(temp_dir.path()), before);
}

/// Moving a file between directories also changes the checksum
#[test]
fn test_move_between_directories_changes_checksum() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "one/file.txt", b"same");
    let before = checksum_of(temp_dir.path());

    fs::create_dir(temp_dir.path().join("two")).unwrap();
    fs::rename(
        temp_dir.path().join("one").join("file.txt"),
        temp_dir.path().join("two").join("file.txt"),
    )
    .unwrap();

    assert_ne!(checksum_of(temp_dir.path()), before);
}

/// Only hidden entries, or nothing at all: zero checksum
#[test]
fn test_empty_tree_checksum_is_zero() {
    let empty = TempDir::new().unwrap();
    assert!(checksum_of(empty.path()).is_zero());

    let hidden_only = TempDir::new().unwrap();
    write_file(hidden_only.path(), ".meta/validation/check.go", b"package main");
    write_file(hidden_only.path(), ".gitignore", b"*");
    fs::create_dir(hidden_only.path().join("empty_dir")).unwrap();

    let (records, checksum) = DirectoryChecksum::new(hidden_only.path().to_path_buf())
        .records()
        .unwrap();
    assert!(records.is_empty());
    assert_eq!(checksum.to_hex(), "0".repeat(64));
}

/// Empty files still contribute their path digest
#[test]
fn test_empty_file_contributes() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "empty.txt", b"");

    assert_eq!(
        checksum_of(temp_dir.path()),
        Checksum::from(compute_bytes_digest("empty.txt", b""))
    );
}

/// The checksum is the XOR of each file's path+contents digest
#[test]
fn test_checksum_matches_manual_fold() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());

    let expected: Checksum = vec![
        compute_bytes_digest("config.yaml", b"version: 3\n"),
        compute_bytes_digest("data/a.txt", b"hi"),
        compute_bytes_digest("data/nested/b.bin", &[0u8, 1, 2, 3, 255]),
        compute_bytes_digest("empty.txt", b""),
    ]
    .into_iter()
    .collect();

    assert_eq!(checksum_of(temp_dir.path()), expected);
}

/// Trees deeper than a typical recursion budget are walked without issue
#[test]
fn test_deep_tree() {
    let temp_dir = TempDir::new().unwrap();
    let mut relative = String::new();
    for i in 0..200 {
        relative.push_str(&format!("d{}/", i));
    }
    relative.push_str("leaf.txt");
    write_file(temp_dir.path(), &relative, b"leaf");

    let (records, checksum) = DirectoryChecksum::new(temp_dir.path().to_path_buf())
        .records()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].relative_path, relative);
    assert_eq!(
        checksum,
        Checksum::from(compute_bytes_digest(&relative, b"leaf"))
    );
}
