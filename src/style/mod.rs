//! Style descriptors and the escape sequences they compile to

pub mod codec;
pub mod named;

pub use codec::{color_part_code, compile, CompiledCode, Layer};
pub use named::NamedColor;
