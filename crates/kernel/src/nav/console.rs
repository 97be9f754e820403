//! Line-oriented console used by the engine and by business actions.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// ANSI sequence: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Interactive text console.
///
/// One line of input per prompt. `read_line` returns `None` once input is
/// exhausted so callers can stop instead of spinning.
pub trait Console: Send {
    /// Read one line without its line ending.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text without a trailing newline and flush.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Clear the visible screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Write a full line.
    fn println(&mut self, line: &str) -> io::Result<()> {
        self.print(line)?;
        self.print("\n")
    }

    /// Show a label and read the answer.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.print(label)?;
        self.read_line()
    }
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R, W> LineConsole<R, W> {
    /// Create a console. Screen clearing is off; see [`Self::with_clear_screen`].
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
        }
    }

    /// Emit the clear-screen sequence on [`Console::clear`].
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Borrow the underlying writer (e.g., captured output in tests).
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Console for LineConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD; callers treat the line as bad input.
        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.print(CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_line_strips_line_endings() {
        let mut console = LineConsole::new(Cursor::new("1\r\nabc\n last".as_bytes()), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("abc"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some(" last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_tolerates_invalid_utf8() {
        let mut console = LineConsole::new(Cursor::new(b"\xff\xfe\n1\n".to_vec()), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_label_without_newline() {
        let mut console = LineConsole::new(Cursor::new("Bob\n".as_bytes()), Vec::new());
        let answer = console.prompt("Nickname: ").unwrap();
        assert_eq!(answer.as_deref(), Some("Bob"));
        assert_eq!(console.writer().as_slice(), b"Nickname: ");
    }

    #[test]
    fn clear_is_opt_in() {
        let mut console = LineConsole::new(Cursor::new(Vec::new()), Vec::new());
        console.clear().unwrap();
        assert!(console.writer().is_empty());

        let mut console = console.with_clear_screen(true);
        console.clear().unwrap();
        assert_eq!(console.into_writer(), CLEAR_SCREEN.as_bytes());
    }
}
