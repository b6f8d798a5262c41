//! Library error types.

use std::io;

/// The sink behind a [`ColorWriter`](crate::ColorWriter) failed.
///
/// `written` counts the bytes that reached the sink before the failure.
#[derive(Debug, thiserror::Error)]
#[error("write failed after {written} bytes: {source}")]
pub struct WriteError {
    pub written: usize,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    pub(crate) fn new(written: usize, source: io::Error) -> Self {
        Self { written, source }
    }
}

impl From<WriteError> for io::Error {
    fn from(err: WriteError) -> Self {
        io::Error::new(err.source.kind(), err)
    }
}
