//! Error types for fskit-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for any failure without a more specific code.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the target path does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Exit code when `checksum --verify` does not match.
pub const EXIT_MISMATCH: i32 = 3;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from fskit-io
    #[error(transparent)]
    Fs(#[from] fskit_io::Error),

    /// Standard I/O error on stdin or stdout
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fs(e) if e.is_not_found() => EXIT_NOT_FOUND,
            Self::ChecksumMismatch { .. } => EXIT_MISMATCH,
            _ => EXIT_FAILURE,
        }
    }
}
