//! Test helper utilities

#![allow(dead_code)]

use termtint::terminal::Fixed;
use termtint::{ColorScheme, ColorWriter, SchemeOptions};

/// Scheme whose destination is always a terminal
pub fn tty_scheme() -> ColorScheme {
    ColorScheme::new(SchemeOptions::default().terminal(Fixed(true)))
}

/// Write `input` through a `ColorWriter` in a single call.
///
/// Returns the reported byte count and what reached the sink.
pub fn filter_once(input: &[u8], is_terminal: bool) -> (usize, Vec<u8>) {
    let mut writer = ColorWriter::with_terminal(Vec::new(), Fixed(is_terminal));
    let n = writer
        .write_filtered(input)
        .expect("Vec sink never fails");
    (n, writer.into_inner().expect("Vec sink never fails"))
}
