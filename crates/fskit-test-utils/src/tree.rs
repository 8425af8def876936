//! [`TestTree`] builder for temporary directory trees.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for laying out files and asserting
/// on the result.
///
/// # Example
///
/// ```rust,no_run
/// use fskit_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.file("src/a.txt", "alpha");
/// tree.dir("empty");
/// tree.assert_file_content("src/a.txt", b"alpha");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestTree::new: failed to create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Resolve `relative` against the root without touching the filesystem.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestTree::file: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {}: {e}", path.display()));
        path
    }

    /// Create a directory and any missing parents.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::dir: failed to create {}: {e}", path.display()));
        path
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `relative` holds exactly `expected`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its bytes differ.
    pub fn assert_file_content(&self, relative: &str, expected: &[u8]) {
        let full_path = self.path(relative);
        let actual = fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert_eq!(
            actual,
            expected,
            "File {} has unexpected content",
            full_path.display()
        );
    }
}

/// Assert that two directory trees hold the same files with the same bytes.
///
/// Directories are compared by the files beneath them; empty directories are
/// compared by name.
///
/// # Panics
/// Panics if either tree cannot be walked or the trees differ.
pub fn assert_trees_equal(expected: &Path, actual: &Path) {
    assert_eq!(snapshot(expected), snapshot(actual));
}

/// Relative path → file bytes (`None` for directories).
fn snapshot(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    let mut entries = BTreeMap::new();
    collect(root, root, &mut entries);
    entries
}

fn collect(root: &Path, dir: &Path, entries: &mut BTreeMap<String, Option<Vec<u8>>>) {
    let listing = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("assert_trees_equal: cannot list {}: {e}", dir.display()));
    for entry in listing {
        let path = entry
            .unwrap_or_else(|e| panic!("assert_trees_equal: bad entry in {}: {e}", dir.display()))
            .path();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            entries.insert(relative, None);
            collect(root, &path, entries);
        } else {
            let bytes = fs::read(&path).unwrap_or_else(|e| {
                panic!("assert_trees_equal: cannot read {}: {e}", path.display())
            });
            entries.insert(relative, Some(bytes));
        }
    }
}
