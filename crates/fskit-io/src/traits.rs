//! The file I/O capability

use crate::{ChecksumMethod, DirEntry, FileInfo, OperatingSystem, Result, path};
use std::path::Path;

/// File and directory operations behind a swappable seam.
///
/// Implementations hold no per-call state. Every operation acquires and
/// releases its own handles before returning.
pub trait FileIo: Send + Sync {
    /// Logical operating system used for path conventions.
    fn operating_system(&self) -> OperatingSystem;

    /// Program path as invoked.
    fn execution_path(&self) -> String {
        path::execution_path()
    }

    fn path_separator(&self) -> &'static str {
        path::path_separator(self.operating_system())
    }

    /// Rewrite a path string for [`FileIo::operating_system`].
    fn to_host_path(&self, path: &str) -> String {
        path::to_host_path(path, self.operating_system())
    }

    /// Join parts after stripping every separator character from each one.
    fn join_path(&self, parts: &[&str]) -> String {
        path::join_path(parts, self.operating_system())
    }

    /// True unless the path is reported as not found.
    ///
    /// Other stat failures, such as permission errors, count as existing.
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read the bytes in `from..to`.
    ///
    /// A `to` of zero, or one past the end of the file, is clamped to the
    /// file size.
    fn read_range(&self, path: &Path, from: u64, to: u64) -> Result<Vec<u8>>;

    /// Create or truncate the file, write all of `data` and set `mode`.
    fn write(&self, path: &Path, data: &[u8], mode: u32) -> Result<()>;

    /// Like [`FileIo::write`], but issues one write per `chunk_size` bytes.
    fn write_buffered(&self, path: &Path, data: &[u8], chunk_size: usize, mode: u32)
    -> Result<()>;

    /// Copy a file's content and permissions, syncing the destination.
    fn copy(&self, source: &Path, destination: &Path) -> Result<()>;

    fn delete(&self, path: &Path) -> Result<()>;

    fn info(&self, path: &Path) -> Result<FileInfo>;

    /// Same leniency as [`FileIo::exists`].
    fn dir_exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path, mode: u32) -> Result<()>;

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Recursively copy a directory tree, stopping at the first failure.
    ///
    /// Files copied before the failure are left in place.
    fn copy_dir(&self, source: &Path, destination: &Path) -> Result<()>;

    /// Recursively delete a directory. An absent path is not an error.
    fn delete_dir(&self, path: &Path) -> Result<()>;

    /// Lowercase hex digest of the whole file.
    fn checksum(&self, path: &Path, method: ChecksumMethod) -> Result<String>;
}
