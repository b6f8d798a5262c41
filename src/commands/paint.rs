//! Paint command handler

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use termtint::{ColorScheme, Config, SchemeOptions};

use super::stdout_writer;

/// Handle paint command.
///
/// Styles `text` joined by spaces, or each line of stdin when `text` is empty.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, style: &str, text: &[String]) -> Result<()> {
    let (mut out, check) = stdout_writer(config);
    let scheme = ColorScheme::new(SchemeOptions::default().terminal(check));
    let paint = scheme.color_func(style);

    if !text.is_empty() {
        writeln!(out, "{}", paint.apply(&text.join(" ")))?;
        out.flush()?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(out, "{}", paint.apply(&line))?;
    }
    out.flush()?;
    Ok(())
}
