use super::Context;
use crate::error::{CliError, Result};
use fskit_io::ChecksumMethod;
use std::io::Write;
use std::path::Path;

pub fn run_checksum(
    ctx: &Context<'_>,
    path: &Path,
    method: &str,
    verify: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let method: ChecksumMethod = method.parse()?;

    if let Some(expected) = verify {
        if expected.len() != method.hex_len() || !expected.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CliError::user(format!(
                "Expected {method} digest must be {} hex characters",
                method.hex_len()
            )));
        }
    }

    let digest = ctx.io.checksum(path, method)?;
    writeln!(out, "{digest}  {}", path.display())?;

    match verify {
        Some(expected) if !expected.eq_ignore_ascii_case(&digest) => {
            Err(CliError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected: expected.to_lowercase(),
                actual: digest,
            })
        }
        _ => Ok(()),
    }
}
