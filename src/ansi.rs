//! Control sequence constants shared by the codec and the filter.

/// Escape byte that starts every control sequence.
pub const ESC: u8 = 0x1b;

/// Second byte of a Control Sequence Introducer (`ESC [`).
pub const CSI_BYTE: u8 = b'[';

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// String Terminator.
pub const ST: &str = "\x1b\\";

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR: &str = "m";

/// SGR reset sequence
pub const RESET: &str = "\x1b[0m";

/// Whether `byte` is a CSI parameter byte (`0-9:;<=>?`).
pub fn is_parameter_byte(byte: u8) -> bool {
    (0x30..=0x3f).contains(&byte)
}

/// Whether `byte` is a CSI intermediate byte (space and `!"#$%&'()*+,-./`).
pub fn is_intermediate_byte(byte: u8) -> bool {
    (0x20..=0x2f).contains(&byte)
}

/// Whether `byte` terminates a CSI sequence.
pub fn is_final_byte(byte: u8) -> bool {
    (0x40..=0x7e).contains(&byte)
}
