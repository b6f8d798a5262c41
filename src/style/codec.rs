//! Style descriptor compiler
//!
//! Compiles descriptors such as `red+b`, `160+u:white` or `#ff0088` into the
//! SGR sequence that applies them. The grammar follows the widely used
//! `mgutz/ansi` convention with truecolor support added:
//!
//! ```text
//! style      := foreground [ ':' background ]
//! color-part := color [ '+' modifiers ]
//! color      := named | decimal(1..=255) | '#' hex6
//! ```
//!
//! Compilation never fails. Anything that is not a recognized color compiles
//! to the reset parameter `0` for its slot.

use std::fmt::{self, Write as _};
use std::ops::Range;

use crate::ansi::{CSI, RESET, SGR};

use super::named::NamedColor;

/// Parameter written after the CSI so every style starts from a clean state.
const NORMAL: &str = "0;";

/// Offset from the base code to the extended color code (38 / 48).
const EXTENDED_OFFSET: u8 = 8;

/// Offset from a base code to its bright variant.
const BRIGHT_OFFSET: u8 = 60;

/// Extended color sub-parameter selecting the 256-color palette.
const COLOR_256: &str = "5;";

/// Extended color sub-parameter selecting 24-bit RGB.
const COLOR_RGB: &str = "2;";

/// Modifier flags and their SGR parameters, in output order.
const MODIFIERS: [(char, &str); 6] = [
    ('b', "1;"), // bold
    ('d', "2;"), // dim
    ('B', "5;"), // blink
    ('u', "4;"), // underline
    ('i', "7;"), // invert
    ('s', "9;"), // strikethrough
];

/// Modifier flag selecting the bright color variant.
const BRIGHT_FLAG: char = 'h';

/// Which half of a style descriptor a color part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Base SGR code of the layer's standard colors.
    pub fn base(self) -> u8 {
        match self {
            Layer::Foreground => 30,
            Layer::Background => 40,
        }
    }
}

/// The escape sequence compiled from a style descriptor.
///
/// Empty for the `""` and `"off"` styles, otherwise a complete SGR sequence.
/// Compiled codes are immutable and cheap to share behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompiledCode(String);

impl CompiledCode {
    /// The escape sequence as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The escape sequence as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether the style emits nothing at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap `text` in this sequence followed by a reset.
    ///
    /// An empty code leaves the text untouched.
    pub fn apply(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(self.0.len() + text.len() + RESET.len());
        out.push_str(&self.0);
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

impl fmt::Display for CompiledCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for CompiledCode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Compile a style descriptor into its escape sequence.
pub fn compile(style: &str) -> CompiledCode {
    match style {
        "" | "off" => return CompiledCode::default(),
        "reset" => return CompiledCode(RESET.to_string()),
        _ => {}
    }

    // Anything past a second ':' is ignored.
    let mut parts = style.split(':');
    let foreground = parts.next().unwrap_or_default();
    let background = parts.next();

    let mut buf = String::with_capacity(CSI.len() + NORMAL.len() + 16);
    buf.push_str(CSI);
    buf.push_str(NORMAL);

    let written = write_color_part(&mut buf, foreground, Layer::Foreground);

    if let Some(background) = background {
        if written {
            buf.push(';');
        }
        write_color_part(&mut buf, background, Layer::Background);
    }

    buf.push_str(SGR);
    CompiledCode(buf)
}

/// SGR parameters for a single color part such as `red+bu` or `#4488cc`.
pub fn color_part_code(part: &str, layer: Layer) -> String {
    let mut buf = String::new();
    write_color_part(&mut buf, part, layer);
    buf
}

/// Append the parameters of one color part to `buf`.
///
/// Returns whether anything was written; only an empty part writes nothing.
fn write_color_part(buf: &mut String, part: &str, layer: Layer) -> bool {
    if part.is_empty() {
        return false;
    }

    let mut segments = part.split('+');
    let color = segments.next().unwrap_or_default();
    let modifiers = segments.next().unwrap_or_default();

    for (flag, code) in MODIFIERS {
        if modifiers.contains(flag) {
            buf.push_str(code);
        }
    }

    let mut base = layer.base();
    if modifiers.contains(BRIGHT_FLAG) {
        base += BRIGHT_OFFSET;
    }

    if let Some(rgb) = parse_rgb(color) {
        write_rgb(buf, rgb, base);
    } else if let Some(named) = NamedColor::from_name(color) {
        let _ = write!(buf, "{}", base + named.index());
    } else if let Some(index) = parse_palette_index(color) {
        let _ = write!(buf, "{};{COLOR_256}{index}", base + EXTENDED_OFFSET);
    } else {
        buf.push('0');
    }

    true
}

/// Parse `#RRGGBB` into its channels.
fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parse a 256-color palette index; 0 and anything above 255 are rejected.
fn parse_palette_index(color: &str) -> Option<u8> {
    if color.is_empty() || !color.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match color.parse::<u16>() {
        Ok(n @ 1..=255) => u8::try_from(n).ok(),
        _ => None,
    }
}

fn write_rgb(buf: &mut String, (r, g, b): (u8, u8, u8), base: u8) {
    let _ = write!(buf, "{};{COLOR_RGB}{r};{g};{b}", base + EXTENDED_OFFSET);
}
