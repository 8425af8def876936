//! Tests for error handling under adverse filesystem conditions
//!
//! Verifies that absence is reported as NotFound and every other failure is
//! passed through with the platform's error kind.

use fskit_io::{DefaultFileIo, Error, FileIo, OsOverride};
use fskit_test_utils::TestTree;

fn io() -> DefaultFileIo {
    DefaultFileIo::with_os_override(OsOverride::Host)
}

#[test]
fn copy_dir_stops_at_first_failure_and_keeps_copied_files() {
    let tree = TestTree::new();
    tree.file("src/one/inner.txt", "one");
    tree.file("src/two/inner.txt", "two");

    // Block whichever entry is listed second so the first is always copied.
    let order: Vec<String> = std::fs::read_dir(tree.path("src"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let (copied, blocked) = (&order[0], &order[1]);
    tree.file(&format!("dst/{blocked}"), "blocker");

    let result = io().copy_dir(&tree.path("src"), &tree.path("dst"));

    assert!(result.is_err(), "copying over a file should fail");
    tree.assert_file_content(&format!("dst/{copied}/inner.txt"), copied.as_bytes());
    tree.assert_file_content(&format!("dst/{blocked}"), b"blocker");
}

#[test]
fn read_of_directory_is_io_error_not_not_found() {
    let tree = TestTree::new();
    let dir = tree.dir("a_dir");

    let err = io().read(&dir).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn exists_is_lenient_on_permission_errors() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let tree = TestTree::new();
        let locked = tree.dir("locked");
        let hidden = tree.file("locked/hidden.txt", "secret");
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let file_exists = io().exists(&hidden);
        let unknown_exists = io().exists(&locked.join("never_created.txt"));

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));

        assert!(file_exists, "stat failure other than not-found counts as present");
        assert!(unknown_exists, "even for paths that were never created");
    }

    #[test]
    fn read_permission_denied_is_passed_through() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let tree = TestTree::new();
        let path = tree.file("secret.txt", "secret content");
        fs::set_permissions(&path, Permissions::from_mode(0o000)).unwrap();

        let result = io().read(&path);

        let _ = fs::set_permissions(&path, Permissions::from_mode(0o644));

        match result {
            Err(Error::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected permission error, got {other:?}"),
        }
    }

    #[test]
    fn write_to_readonly_directory_is_passed_through() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let tree = TestTree::new();
        let readonly = tree.dir("readonly");
        fs::set_permissions(&readonly, Permissions::from_mode(0o555)).unwrap();

        let result = io().write(&readonly.join("file.txt"), b"content", 0o644);

        let _ = fs::set_permissions(&readonly, Permissions::from_mode(0o755));

        let err = result.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn delete_dir_does_not_swallow_permission_errors() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let tree = TestTree::new();
        tree.file("parent/child/file.txt", "x");
        let parent = tree.path("parent");
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io().delete_dir(&parent.join("child"));

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err(), "permission failures must propagate");
    }
}
