//! Line-oriented terminal I/O.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error_fmt::{AppError, IoResultExt};

/// Input and output streams the command loop talks to.
///
/// Production code uses stdin/stdout; tests use an in-memory cursor and buffer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is.
    pub fn print(&mut self, text: &str) -> Result<(), AppError> {
        self.output
            .write_all(text.as_bytes())
            .with_context("failed to write to stdout")
    }

    /// Print `message` without a newline and read one line of input.
    ///
    /// The line is returned with surrounding whitespace trimmed. Bytes that are
    /// not valid UTF-8 are replaced with U+FFFD. Returns `None` once the input
    /// is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        self.print(message)?;
        self.output.flush().with_context("failed to flush stdout")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .with_context("failed to read input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
