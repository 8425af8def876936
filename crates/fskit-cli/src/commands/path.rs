use super::Context;
use crate::error::Result;
use std::io::Write;

pub fn run_os(ctx: &Context<'_>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", ctx.io.operating_system())?;
    Ok(())
}

pub fn run_host_path(ctx: &Context<'_>, path: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", ctx.io.to_host_path(path))?;
    Ok(())
}

pub fn run_join(ctx: &Context<'_>, parts: &[String], out: &mut dyn Write) -> Result<()> {
    let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
    writeln!(out, "{}", ctx.io.join_path(&parts))?;
    Ok(())
}
