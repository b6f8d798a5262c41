//! Roles command handler

use anyhow::Result;
use std::io::Write;

use termtint::terminal::Stream;
use termtint::{ColorScheme, Config};

use super::stdout_writer;

/// Format one line per configured role: name, then the style painted with itself.
pub fn render(scheme: &ColorScheme) -> Vec<String> {
    let width = scheme.roles().map(|(role, _)| role.len()).max().unwrap_or(0);
    scheme
        .roles()
        .map(|(role, style)| format!("{:<width$}  {}", role, scheme.paint(style, style)))
        .collect()
}

/// Handle roles command.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    let (mut out, _) = stdout_writer(config);
    let scheme = ColorScheme::from_config(config, Stream::Stdout);
    for line in render(&scheme) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
