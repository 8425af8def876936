//! Tests against the checked-in fixture tree under `test-fixtures/tree`.
//!
//! Fixtures are read-only; anything that mutates works on a copy.

use fskit_io::{ChecksumMethod, DefaultFileIo, FileIo, OsOverride};
use fskit_test_utils::{TestTree, assert_trees_equal};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/tree")
}

fn io() -> DefaultFileIo {
    DefaultFileIo::with_os_override(OsOverride::Host)
}

#[test]
fn test_fixture_file_and_dir_exist() {
    let io = io();
    assert!(io.exists(&fixtures().join("test_file_1.txt")));
    assert!(io.dir_exists(&fixtures().join("test_dir_1")));
    assert!(!io.exists(&fixtures().join("non_existing_file.txt")));
}

#[test]
fn test_read_fixture() {
    let data = io().read(&fixtures().join("test_file_1.txt")).unwrap();
    assert_eq!(
        String::from_utf8(data).unwrap(),
        "Initial bytes\nThis is Second Line\nMore Text"
    );
}

#[test]
fn test_read_range_fixture() {
    let io = io();
    let path = fixtures().join("test_file_1.txt");

    assert_eq!(io.read_range(&path, 0, 7).unwrap(), b"Initial");
    assert_eq!(
        io.read_range(&path, 14, 50).unwrap(),
        b"This is Second Line\nMore Text"
    );
    assert_eq!(
        io.read_range(&path, 14, 1000).unwrap(),
        b"This is Second Line\nMore Text"
    );
    assert_eq!(io.read_range(&path, 0, 0).unwrap(), io.read(&path).unwrap());
}

#[test]
fn test_missing_fixture_is_not_found() {
    let io = io();
    let missing = fixtures().join("non_existing_file.txt");

    assert!(io.read(&missing).unwrap_err().is_not_found());
    assert!(io.read_range(&missing, 0, 50).unwrap_err().is_not_found());
    assert!(io.info(&missing).unwrap_err().is_not_found());
}

#[test]
fn test_fixture_checksums() {
    let io = io();
    let path = fixtures().join("test_file_1.txt");

    assert_eq!(
        io.checksum(&path, ChecksumMethod::Md5).unwrap(),
        "bad71408e80acc34a474d42ce219d154"
    );
    assert_eq!(
        io.checksum(&path, ChecksumMethod::Sha256).unwrap(),
        "030685cfa852639dee5e327f54153df00af48f75e146331b44ee72fe3b0cee6a"
    );
}

#[test]
fn test_fixture_info() {
    let info = io().info(&fixtures().join("test_file_1.txt")).unwrap();
    assert_eq!(info.name, "test_file_1.txt");
    assert_eq!(info.size, 43);
    assert!(!info.is_dir);
}

#[test]
fn test_list_fixture_dir() {
    let mut entries = io().list_dir(&fixtures().join("test_dir_1")).unwrap();
    entries.sort();

    let names: Vec<(&str, bool)> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
    assert_eq!(names, vec![("entry_a.txt", false), ("nested", true)]);
}

#[test]
fn test_copy_fixture_tree() {
    let tree = TestTree::new();
    let destination = tree.path("copy");

    io().copy_dir(&fixtures(), &destination).unwrap();

    assert_trees_equal(&fixtures(), &destination);
}
