//! Error types for fskit-io

use std::path::PathBuf;

/// Result type for fskit-io operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fskit-io operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid checksum method: {method}")]
    InvalidChecksumMethod { method: String },

    #[error("Invalid byte range: from {from} is past to {to}")]
    InvalidRange { from: u64, to: u64 },

    #[error("Chunk size must be at least one byte")]
    InvalidChunkSize,

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    /// Wrap an I/O error with the path it occurred at.
    ///
    /// A `NotFound` kind becomes [`Error::NotFound`] so callers can branch on
    /// absence without probing first. Every other kind is passed through.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// True when the target path was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
