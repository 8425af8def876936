use super::Context;
use crate::error::Result;
use colored::Colorize;
use fskit_io::FileInfo;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

pub fn run_exists(ctx: &Context<'_>, path: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", ctx.io.exists(path))?;
    Ok(())
}

pub fn run_read(
    ctx: &Context<'_>,
    path: &Path,
    from: Option<u64>,
    to: Option<u64>,
    out: &mut dyn Write,
) -> Result<()> {
    let data = match (from, to) {
        (None, None) => ctx.io.read(path)?,
        (from, to) => ctx
            .io
            .read_range(path, from.unwrap_or(0), to.unwrap_or(0))?,
    };
    out.write_all(&data)?;
    out.flush()?;
    Ok(())
}

pub fn run_write(
    ctx: &Context<'_>,
    path: &Path,
    content: Option<String>,
    chunk_size: Option<usize>,
    mode: Option<u32>,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let data = match content {
        Some(content) => content.into_bytes(),
        None => {
            let mut buffer = Vec::new();
            input.read_to_end(&mut buffer)?;
            buffer
        }
    };
    let mode = mode.unwrap_or(ctx.config.file_mode);
    let chunk_size = chunk_size.unwrap_or(ctx.config.chunk_size);

    ctx.io.write_buffered(path, &data, chunk_size, mode)?;

    writeln!(
        out,
        "{} {} ({} bytes)",
        "Wrote".green(),
        path.display(),
        data.len()
    )?;
    Ok(())
}

pub fn run_copy(
    ctx: &Context<'_>,
    source: &Path,
    destination: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.io.copy(source, destination)?;
    writeln!(
        out,
        "{} {} -> {}",
        "Copied".green(),
        source.display(),
        destination.display()
    )?;
    Ok(())
}

pub fn run_delete(ctx: &Context<'_>, path: &Path, out: &mut dyn Write) -> Result<()> {
    ctx.io.delete(path)?;
    writeln!(out, "{} {}", "Deleted".green(), path.display())?;
    Ok(())
}

/// JSON view of [`FileInfo`].
#[derive(Debug, Serialize)]
struct InfoView<'a> {
    name: &'a str,
    size: u64,
    mode: String,
    modified: u64,
    is_dir: bool,
}

impl<'a> From<&'a FileInfo> for InfoView<'a> {
    fn from(info: &'a FileInfo) -> Self {
        Self {
            name: &info.name,
            size: info.size,
            mode: format!("{:o}", info.mode),
            modified: info
                .modified
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            is_dir: info.is_dir,
        }
    }
}

pub fn run_info(ctx: &Context<'_>, path: &Path, json: bool, out: &mut dyn Write) -> Result<()> {
    let info = ctx.io.info(path)?;
    let view = InfoView::from(&info);

    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    let kind = if view.is_dir { "directory" } else { "file" };
    writeln!(out, "{}: {}", "Name".bold(), view.name)?;
    writeln!(out, "{}: {}", "Kind".bold(), kind)?;
    writeln!(out, "{}: {}", "Size".bold(), view.size)?;
    writeln!(out, "{}: {}", "Mode".bold(), view.mode)?;
    writeln!(out, "{}: {}", "Modified".bold(), view.modified)?;
    Ok(())
}
