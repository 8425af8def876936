//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fskit - Cross-platform file and directory operations
#[derive(Parser, Debug)]
#[command(name = "fskit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "FSKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the detected operating system
    Os,

    /// Rewrite a path for the detected operating system
    ///
    /// Examples:
    ///   TEST_OS_OVERRIDE=windows fskit host-path C:/path/to/file
    ///   TEST_OS_OVERRIDE=linux fskit host-path 'C:\path\to\file'
    HostPath {
        /// Path string to rewrite
        path: String,
    },

    /// Join parts with the separator of the detected operating system
    ///
    /// Every slash and backslash inside a part is removed first.
    Join {
        /// Parts to join
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Print whether a file exists
    Exists { path: PathBuf },

    /// Print whether a directory exists
    DirExists { path: PathBuf },

    /// Write a file's bytes to stdout
    Read {
        path: PathBuf,

        /// Start offset in bytes
        #[arg(long)]
        from: Option<u64>,

        /// End offset in bytes; 0 or past the end means the end of the file
        #[arg(long)]
        to: Option<u64>,
    },

    /// Write content to a file, creating or truncating it
    Write {
        path: PathBuf,

        /// Content to write; read from stdin when omitted
        #[arg(long)]
        content: Option<String>,

        /// Write in chunks of this many bytes; defaults to the configured chunk size
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Octal permission bits, e.g. 644
        #[arg(long, value_parser = parse_mode)]
        mode: Option<u32>,
    },

    /// Copy a single file
    Copy {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Delete a single file
    Delete { path: PathBuf },

    /// Show file metadata
    Info {
        path: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create a single directory
    Mkdir {
        path: PathBuf,

        /// Octal permission bits, e.g. 755
        #[arg(long, value_parser = parse_mode)]
        mode: Option<u32>,
    },

    /// List the immediate children of a directory
    Ls {
        path: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Recursively copy a directory
    CopyDir {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Recursively delete a directory; missing directories are ignored
    DeleteDir { path: PathBuf },

    /// Print a file's checksum
    Checksum {
        path: PathBuf,

        /// Hash algorithm: md5, sha1 or sha256
        #[arg(short, long, default_value = "sha256")]
        method: String,

        /// Expected digest; exits with code 3 when it differs
        #[arg(long)]
        verify: Option<String>,
    },
}

/// Parse octal permission bits such as `644` or `0o755`.
fn parse_mode(value: &str) -> std::result::Result<u32, String> {
    let digits = value.trim_start_matches("0o");
    u32::from_str_radix(digits, 8).map_err(|_| format!("invalid octal mode: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_octal_modes() {
        assert_eq!(parse_mode("644"), Ok(0o644));
        assert_eq!(parse_mode("0o755"), Ok(0o755));
        assert!(parse_mode("999").is_err());
    }

    #[test]
    fn parses_read_range() {
        let cli =
            Cli::try_parse_from(["fskit", "read", "f.txt", "--from", "2", "--to", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Read {
                path: PathBuf::from("f.txt"),
                from: Some(2),
                to: Some(9),
            })
        );
    }

    #[test]
    fn checksum_defaults_to_sha256() {
        let cli = Cli::try_parse_from(["fskit", "checksum", "f.bin"]).unwrap();
        match cli.command {
            Some(Commands::Checksum { method, verify, .. }) => {
                assert_eq!(method, "sha256");
                assert_eq!(verify, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
