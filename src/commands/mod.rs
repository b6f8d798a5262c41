//! Command handlers for the termtint CLI.
//!
//! Each submodule handles a specific CLI command.
//! The main dispatch logic remains in main.rs.

pub mod codes;
pub mod completions;
pub mod paint;
pub mod roles;
pub mod strip;

use termtint::filter::ColorWriter;
use termtint::terminal::{ModeCheck, Stream};
use termtint::Config;

/// Stdout wrapped so sequences are stripped unless the configured mode
/// says stdout should get color.
pub fn stdout_writer(config: &Config) -> (ColorWriter<std::io::StdoutLock<'static>>, ModeCheck) {
    let check = config.color.check(Stream::Stdout);
    (ColorWriter::with_terminal(std::io::stdout().lock(), check), check)
}
