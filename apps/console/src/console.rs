//! Line-oriented terminal I/O.
//!
//! Generic over the reader and writer so sessions can be driven from tests
//! with `Cursor` and `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::ConsoleResult;

/// A prompt/response channel to the user.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints several lines.
    pub fn say_all<I, S>(&mut self, lines: I) -> ConsoleResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Prints `label` without a newline and reads the answer.
    ///
    /// Returns `None` once input is exhausted. The trailing line break is
    /// stripped; other whitespace is left for the caller.
    pub fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(label, "Input closed at prompt");
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Reports a rejected input. The session carries on afterwards.
    pub fn reject(&mut self, reason: &dyn Display) -> ConsoleResult<()> {
        debug!(%reason, "Input rejected");
        self.say(format!("Invalid input: {reason}"))
    }

    /// Hands back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn captured(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_reads_lines_and_strips_newlines() {
        let mut console = console("1\r\n two \n");

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some(" two "));
        assert_eq!(console.prompt("> ").unwrap(), None);
        assert_eq!(captured(console), "> > > ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("yes");
        assert_eq!(console.prompt("? ").unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn test_say_and_reject() {
        let mut console = console("");
        console.say("hello").unwrap();
        console.say_all(["a", "b"]).unwrap();
        console.reject(&"quantity must be positive").unwrap();

        assert_eq!(
            captured(console),
            "hello\na\nb\nInvalid input: quantity must be positive\n"
        );
    }
}
