use super::Context;
use crate::error::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

pub fn run_dir_exists(ctx: &Context<'_>, path: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", ctx.io.dir_exists(path))?;
    Ok(())
}

pub fn run_mkdir(
    ctx: &Context<'_>,
    path: &Path,
    mode: Option<u32>,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.io
        .create_dir(path, mode.unwrap_or(ctx.config.dir_mode))?;
    writeln!(out, "{} {}", "Created".green(), path.display())?;
    Ok(())
}

/// Entries are sorted by name; the I/O layer returns them in OS order.
pub fn run_ls(ctx: &Context<'_>, path: &Path, json: bool, out: &mut dyn Write) -> Result<()> {
    let mut entries = ctx.io.list_dir(path)?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        let view: Vec<serde_json::Value> = entries
            .iter()
            .map(|e| serde_json::json!({ "name": e.name, "is_dir": e.is_dir }))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &entries {
        if entry.is_dir {
            writeln!(out, "{}/", entry.name.blue().bold())?;
        } else {
            writeln!(out, "{}", entry.name)?;
        }
    }
    Ok(())
}

pub fn run_copy_dir(
    ctx: &Context<'_>,
    source: &Path,
    destination: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.io.copy_dir(source, destination)?;
    writeln!(
        out,
        "{} {} -> {}",
        "Copied".green(),
        source.display(),
        destination.display()
    )?;
    Ok(())
}

pub fn run_delete_dir(ctx: &Context<'_>, path: &Path, out: &mut dyn Write) -> Result<()> {
    ctx.io.delete_dir(path)?;
    writeln!(out, "{} {}", "Deleted".green(), path.display())?;
    Ok(())
}
