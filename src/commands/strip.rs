//! Strip command handler

use anyhow::{Context, Result};
use std::io::{self, Read, Write};

use termtint::filter::ColorWriter;

/// Copy `input` to `output` without CSI sequences, returning `output`.
///
/// Sequences split across read boundaries are still removed.
pub fn copy_stripped<R: Read, W: Write>(input: &mut R, output: W) -> Result<W> {
    let mut writer = ColorWriter::new(output).streaming();
    io::copy(input, &mut writer).context("Failed to copy input")?;
    let output = writer.into_inner()?;
    Ok(output)
}

/// Handle strip command.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let mut out = copy_stripped(&mut io::stdin().lock(), io::stdout().lock())?;
    out.flush()?;
    Ok(())
}
