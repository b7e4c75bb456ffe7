//! Bounded line reader for diff input.

use crate::error::{Result, SpellError};
use std::io::{BufRead, Read};

/// Largest single line accepted from a diff (1 MiB).
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Reads newline-terminated lines, refusing any line longer than the limit.
///
/// A line that exceeds the limit is an error rather than being truncated,
/// so an attribution is never produced from half a line.
pub(super) struct LineReader<R> {
    inner: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub(super) fn new(inner: R) -> Self {
        Self::with_limit(inner, MAX_LINE_BYTES)
    }

    pub(super) fn with_limit(inner: R, max_len: usize) -> Self {
        Self {
            inner,
            max_len,
            buf: Vec::new(),
        }
    }

    /// Returns the next line without its terminator, or `None` at end of input.
    pub(super) fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();

        // Room for a full line plus its "\r\n"; any more means "too long".
        let limit = self.max_len as u64 + 2;
        let read = (&mut self.inner)
            .take(limit)
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| SpellError::MalformedInput(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        if self.buf.len() > self.max_len {
            return Err(SpellError::MalformedInput(format!(
                "line exceeds maximum length of {} bytes",
                self.max_len
            )));
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
