//! Line input for the interactive session.

use std::io::{self, BufRead};

use dialoguer::Input;

/// Source of user answers.
pub trait Prompter {
    /// Read one line of input for `prompt`.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether this prompter displays `prompt` itself.
    fn renders_prompt(&self) -> bool;
}

/// Reads lines from any buffered reader. Used for pipes and tests.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn renders_prompt(&self) -> bool {
        false
    }
}

/// Reads lines with dialoguer when stdin is a terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        // dialoguer appends its own ": " separator.
        let label = prompt.trim_end_matches(':');
        match Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(dialoguer::Error::IO(err)) => Err(err),
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }
}
