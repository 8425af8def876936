//! Command implementations
//!
//! Every command works against a [`FileIo`] and writes its output to the
//! given sink, so the same code runs under the binary and under tests with a
//! mock.

mod checksum;
mod dir;
mod file;
mod path;

pub use checksum::run_checksum;
pub use dir::{run_copy_dir, run_delete_dir, run_dir_exists, run_ls, run_mkdir};
pub use file::{run_copy, run_delete, run_exists, run_info, run_read, run_write};
pub use path::{run_host_path, run_join, run_os};

use crate::cli::Commands;
use crate::error::Result;
use fskit_io::{FileIo, IoConfig};
use std::io::{Read, Write};

/// Everything a command needs besides its arguments.
pub struct Context<'a> {
    pub io: &'a dyn FileIo,
    pub config: &'a IoConfig,
}

/// Dispatch a parsed command.
pub fn execute(
    cmd: Commands,
    ctx: &Context<'_>,
    out: &mut dyn Write,
    input: &mut dyn Read,
) -> Result<()> {
    tracing::debug!(command = ?cmd, "Executing command");
    match cmd {
        Commands::Os => run_os(ctx, out),
        Commands::HostPath { path } => run_host_path(ctx, &path, out),
        Commands::Join { parts } => run_join(ctx, &parts, out),
        Commands::Exists { path } => run_exists(ctx, &path, out),
        Commands::DirExists { path } => run_dir_exists(ctx, &path, out),
        Commands::Read { path, from, to } => run_read(ctx, &path, from, to, out),
        Commands::Write {
            path,
            content,
            chunk_size,
            mode,
        } => run_write(ctx, &path, content, chunk_size, mode, input, out),
        Commands::Copy {
            source,
            destination,
        } => run_copy(ctx, &source, &destination, out),
        Commands::Delete { path } => run_delete(ctx, &path, out),
        Commands::Info { path, json } => run_info(ctx, &path, json, out),
        Commands::Mkdir { path, mode } => run_mkdir(ctx, &path, mode, out),
        Commands::Ls { path, json } => run_ls(ctx, &path, json, out),
        Commands::CopyDir {
            source,
            destination,
        } => run_copy_dir(ctx, &source, &destination, out),
        Commands::DeleteDir { path } => run_delete_dir(ctx, &path, out),
        Commands::Checksum {
            path,
            method,
            verify,
        } => run_checksum(ctx, &path, &method, verify.as_deref(), out),
    }
}
