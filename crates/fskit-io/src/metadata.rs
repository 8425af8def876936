//! File and directory metadata returned by [`FileIo`](crate::FileIo)

use std::fs::Metadata;
use std::time::SystemTime;

/// Metadata of a single filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Final path component
    pub name: String,
    /// Length in bytes
    pub size: u64,
    /// Permission bits. Outside Unix only the write bits are meaningful.
    pub mode: u32,
    pub modified: SystemTime,
    pub is_dir: bool,
}

impl FileInfo {
    pub(crate) fn from_metadata(name: String, metadata: &Metadata) -> Self {
        Self {
            name,
            size: metadata.len(),
            mode: mode_of(metadata),
            // Platforms without mtime report the epoch.
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            is_dir: metadata.is_dir(),
        }
    }
}

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

#[cfg(unix)]
pub(crate) fn mode_of(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
pub(crate) fn mode_of(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
