use crate::buffer::reserve;
use anyhow::{Context, Result};
use std::io::{BufRead, ErrorKind};

/// Initial size of the line buffer; it grows geometrically from there.
pub const LINE_BUFSIZE: usize = 1024;

/// Reads newline-terminated lines from any buffered reader.
///
/// The newline is consumed and dropped. End of input terminates the line as well, so
/// a final line without a trailing newline is still returned. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD.
pub struct LineReader<R> {
    inner: R,
    eof: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, eof: false }
    }

    /// Read the next line.
    ///
    /// Returns an empty string both for an empty line and for end of input; use
    /// [`LineReader::at_eof`] to tell them apart. Fails with `allocation error` if the
    /// buffer cannot grow.
    pub fn read_line(&mut self) -> Result<String> {
        self.eof = false;
        let mut buffer: Vec<u8> = Vec::new();
        reserve(&mut buffer, 0, LINE_BUFSIZE)?;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("failed to read input"),
            };
            if available.is_empty() {
                self.eof = true;
                break;
            }

            let (chunk, consumed, line_done) = match available.iter().position(|&b| b == b'\n') {
                Some(newline) => (&available[..newline], newline + 1, true),
                None => (available, available.len(), false),
            };
            reserve(&mut buffer, chunk.len(), LINE_BUFSIZE)?;
            buffer.extend_from_slice(chunk);
            self.inner.consume(consumed);

            if line_done {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Whether the last [`LineReader::read_line`] stopped at end of input.
    pub fn at_eof(&self) -> bool {
        self.eof
    }
}
