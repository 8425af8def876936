//! Cross-platform file and directory I/O
//!
//! Provides a stateless [`FileIo`] capability over the operating system's
//! file calls, host path rewriting between Windows and POSIX conventions,
//! and whole-file checksums.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod metadata;
pub mod os;
pub mod path;
pub mod traits;

pub use checksum::ChecksumMethod;
pub use config::{ConfigStore, IoConfig};
pub use error::{Error, Result};
pub use io::DefaultFileIo;
pub use metadata::{DirEntry, FileInfo};
pub use os::{OS_OVERRIDE_ENV, OperatingSystem, OsOverride, detect_operating_system};
pub use path::{join_path, path_separator, to_host_path};
pub use traits::FileIo;
