//! termtint
//!
//! Turns compact style strings such as `red+b` or `#ff8700:black` into ANSI
//! SGR escape sequences, and strips CSI escape sequences from output that
//! is not going to a terminal.
//!
//! ```
//! use termtint::{ColorScheme, ColorWriter, SchemeOptions};
//! use termtint::terminal::Fixed;
//! use std::io::Write;
//!
//! let scheme = ColorScheme::new(SchemeOptions::default().terminal(Fixed(true)));
//! let warn = scheme.color_func("yellow+b");
//!
//! let mut out = ColorWriter::new(Vec::new());
//! write!(out, "{}", warn.apply("careful")).unwrap();
//! assert_eq!(out.get_ref().as_slice(), b"careful");
//! ```

pub mod ansi;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod scheme;
pub mod style;
pub mod terminal;

pub use config::Config;
pub use error::WriteError;
pub use filter::ColorWriter;
pub use scheme::{ColorFunc, ColorScheme, SchemeOptions, StyleCache};
pub use style::{compile, CompiledCode, NamedColor};
pub use terminal::{ColorMode, TerminalCheck};
