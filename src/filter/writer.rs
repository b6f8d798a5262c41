//! Sink wrapper that strips control sequences from non-terminal output

use std::io::{self, Write};
use std::mem;
use std::sync::Arc;

use tracing::debug;

use crate::error::WriteError;
use crate::terminal::{Fixed, SharedCheck, TerminalCheck};

use super::scanner::scan;

/// Longest open sequence a streaming writer holds back between writes.
pub const MAX_HELD_BYTES: usize = 4096;

/// Writes bytes through to `W`, removing CSI sequences whenever the
/// destination is not a terminal.
///
/// The terminal check is consulted on every write. By default each write is
/// scanned on its own, so a sequence split across two writes is passed
/// through. [`ColorWriter::streaming`] instead holds back an unterminated
/// sequence and rescans it together with the next write.
pub struct ColorWriter<W: Write> {
    inner: W,
    terminal: SharedCheck,
    streaming: bool,
    held: Vec<u8>,
}

impl<W: Write> ColorWriter<W> {
    /// Wrap `inner`, treating it as not a terminal until told otherwise.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            terminal: Arc::new(Fixed(false)),
            streaming: false,
            held: Vec::new(),
        }
    }

    /// Wrap `inner` and ask `check` whether it is a terminal.
    pub fn with_terminal(inner: W, check: impl TerminalCheck + 'static) -> Self {
        let mut writer = Self::new(inner);
        writer.set_terminal(check);
        writer
    }

    /// Carry open sequences across writes.
    #[must_use]
    pub fn streaming(mut self) -> Self {
        self.streaming = true;
        self
    }

    /// Replace the terminal check.
    pub fn set_terminal(&mut self, check: impl TerminalCheck + 'static) {
        self.terminal = Arc::new(check);
    }

    /// Replace the terminal check with a shared one.
    pub fn set_shared_terminal(&mut self, check: SharedCheck) {
        self.terminal = check;
    }

    /// Whether the destination currently counts as a terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_terminal()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Bytes held back from the last write, if any.
    pub fn held(&self) -> &[u8] {
        &self.held
    }

    /// Write any held-back bytes and return the inner writer.
    pub fn into_inner(mut self) -> Result<W, WriteError> {
        self.release_held()?;
        Ok(self.inner)
    }

    /// Write `buf`, returning how many bytes reached the inner writer.
    ///
    /// Stripped sequences are not counted, so for non-terminal output the
    /// count is the length of the filtered text. On failure the error
    /// carries the count of bytes written before it.
    pub fn write_filtered(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        if self.is_terminal() {
            let mut written = self.release_held()?;
            self.inner
                .write_all(buf)
                .map_err(|e| WriteError::new(written, e))?;
            written += buf.len();
            return Ok(written);
        }

        if self.held.is_empty() {
            return self.filter(buf);
        }

        let mut joined = mem::take(&mut self.held);
        joined.extend_from_slice(buf);
        self.filter(&joined)
    }

    fn filter(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        let inner = &mut self.inner;
        let mut written = 0;

        let tail = scan(data, |span| {
            inner
                .write_all(span)
                .map_err(|e| WriteError::new(written, e))?;
            written += span.len();
            Ok::<(), WriteError>(())
        })?;

        let mut end = data.len();
        if self.streaming {
            if let Some(start) = tail.open_sequence {
                if data.len() - start <= MAX_HELD_BYTES {
                    debug!(len = data.len() - start, "Holding back open escape sequence");
                    self.held = data[start..].to_vec();
                    end = start;
                } else {
                    debug!(
                        len = data.len() - start,
                        limit = MAX_HELD_BYTES,
                        "Open escape sequence too long, passing through"
                    );
                }
            }
        }

        let rest = &data[tail.pending_start..end];
        if !rest.is_empty() {
            self.inner
                .write_all(rest)
                .map_err(|e| WriteError::new(written, e))?;
            written += rest.len();
        }

        Ok(written)
    }

    /// Write held-back bytes verbatim.
    fn release_held(&mut self) -> Result<usize, WriteError> {
        if self.held.is_empty() {
            return Ok(0);
        }
        let held = mem::take(&mut self.held);
        self.inner
            .write_all(&held)
            .map_err(|e| WriteError::new(0, e))?;
        Ok(held.len())
    }
}

impl<W: Write> Write for ColorWriter<W> {
    /// Reports the whole buffer as consumed; see
    /// [`write_filtered`](ColorWriter::write_filtered) for the filtered count.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_filtered(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.release_held()?;
        self.inner.flush()
    }
}

impl<W: Write + std::fmt::Debug> std::fmt::Debug for ColorWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorWriter")
            .field("inner", &self.inner)
            .field("is_terminal", &self.is_terminal())
            .field("streaming", &self.streaming)
            .field("held", &self.held.len())
            .finish()
    }
}
