//! Line-oriented text console.
//!
//! The session and the interactive strategy both talk to the user through
//! one `Console`, passed by reference on every call, so there is a single
//! owner of the input stream.

use std::io::{self, BufRead, Stdout, Write};

/// Line-based input and output.
pub trait Console {
    /// Print `prompt` and read one line, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// A console over any buffered reader and writer.
///
/// ```
/// use std::io::Cursor;
/// use santorini::game::{Console, IoConsole};
///
/// let mut console = IoConsole::new(Cursor::new("A\n"), Vec::new());
/// assert_eq!(console.read_line("Select a worker to move").unwrap(), Some("A".to_string()));
/// assert_eq!(console.read_line("again").unwrap(), None);
/// ```
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl IoConsole<io::StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Split back into reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(trimmed.to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_and_prompts() {
        let mut console = IoConsole::new(Cursor::new("n\r\nse\n"), Vec::new());

        assert_eq!(console.read_line("first").unwrap().as_deref(), Some("n"));
        assert_eq!(console.read_line("second").unwrap().as_deref(), Some("se"));
        assert_eq!(console.read_line("third").unwrap(), None);

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_write_line() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write_line("white has won").unwrap();
        assert_eq!(console.output().as_slice(), b"white has won\n");
    }
}
