//! Escape sequence filtering for non-terminal destinations
//!
//! Text styled for a terminal should not leak escape sequences into log
//! files and pipes. [`ColorWriter`] wraps any [`std::io::Write`] sink and
//! removes complete CSI sequences (SGR colors, cursor movement, erase, ...)
//! whenever its terminal check says the sink is not a terminal.
//!
//! Ambiguous input is always kept: a lone `ESC`, an unterminated `ESC [`,
//! or a sequence interrupted by a byte outside the CSI ranges passes
//! through unchanged.

pub mod scanner;
pub mod writer;

pub use scanner::{strip, strip_str};
pub use writer::{ColorWriter, MAX_HELD_BYTES};
