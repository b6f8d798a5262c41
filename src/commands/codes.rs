//! Codes command handler

use anyhow::Result;

use termtint::style::compile;

/// Render a compiled style with the escape byte spelled out as `\x1b`.
pub fn render(style: &str) -> String {
    compile(style).as_str().replace('\x1b', "\\x1b")
}

/// Handle codes command.
#[cfg(not(tarpaulin_include))]
pub fn handle(style: &str) -> Result<()> {
    println!("{}", render(style));
    Ok(())
}
