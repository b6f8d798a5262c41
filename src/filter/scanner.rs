//! Single-pass CSI scanner
//!
//! Walks a buffer once with a three-state machine. Text between control
//! sequences is handed to a callback span by span; complete
//! `ESC [ params* intermediates* final` sequences are skipped. Anything that
//! merely looks like the start of a sequence is kept.

use std::borrow::Cow;

use tracing::trace;

use crate::ansi::{is_final_byte, is_intermediate_byte, is_parameter_byte, CSI_BYTE, ESC};

/// Scanner states.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    #[default]
    Normal,
    /// Saw ESC at `start`
    Escape { start: usize },
    /// Saw ESC [ at `start`, possibly followed by parameter/intermediate bytes
    Csi { start: usize },
}

/// Where a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTail {
    /// Start of the text not yet handed to the callback.
    pub pending_start: usize,
    /// Start of an escape sequence still open at the end of the buffer.
    pub open_sequence: Option<usize>,
    /// Number of sequences skipped.
    pub stripped: usize,
}

/// Scan `buf`, calling `emit` with every span of text that precedes a
/// stripped sequence.
///
/// The text after the last stripped sequence is not emitted; the returned
/// [`ScanTail`] says where it starts and whether it ends in an open sequence.
/// Empty spans are never emitted. The first error from `emit` stops the scan.
pub fn scan<E>(
    buf: &[u8],
    mut emit: impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<ScanTail, E> {
    let mut state = ScanState::Normal;
    let mut pending_start = 0;
    let mut stripped = 0;

    for (i, &byte) in buf.iter().enumerate() {
        state = match (state, byte) {
            // A new ESC abandons any open sequence; its bytes stay pending.
            (_, ESC) => ScanState::Escape { start: i },
            (ScanState::Escape { start }, CSI_BYTE) => ScanState::Csi { start },
            (ScanState::Csi { start }, b) if is_parameter_byte(b) || is_intermediate_byte(b) => {
                ScanState::Csi { start }
            }
            (ScanState::Csi { start }, b) if is_final_byte(b) => {
                if start > pending_start {
                    emit(&buf[pending_start..start])?;
                }
                trace!(
                    final_byte = %char::from(b),
                    len = i + 1 - start,
                    "Stripped CSI sequence"
                );
                pending_start = i + 1;
                stripped += 1;
                ScanState::Normal
            }
            _ => ScanState::Normal,
        };
    }

    let open_sequence = match state {
        ScanState::Normal => None,
        ScanState::Escape { start } | ScanState::Csi { start } => Some(start),
    };

    Ok(ScanTail {
        pending_start,
        open_sequence,
        stripped,
    })
}

/// Remove all complete CSI sequences from `buf`.
///
/// Borrows when there is nothing to remove.
pub fn strip(buf: &[u8]) -> Cow<'_, [u8]> {
    let mut out = Vec::new();
    let tail = match scan(buf, |span| {
        out.extend_from_slice(span);
        Ok::<(), std::convert::Infallible>(())
    }) {
        Ok(tail) => tail,
        Err(never) => match never {},
    };

    if tail.stripped == 0 {
        return Cow::Borrowed(buf);
    }
    out.extend_from_slice(&buf[tail.pending_start..]);
    Cow::Owned(out)
}

/// Remove all complete CSI sequences from `text`.
pub fn strip_str(text: &str) -> Cow<'_, str> {
    match strip(text.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(text),
        // Only whole ASCII sequences are removed, so the rest stays valid UTF-8.
        Cow::Owned(bytes) => Cow::Owned(
            String::from_utf8(bytes)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        ),
    }
}
