//! In-memory record of the session dialogue.
//!
//! Every line shown to the user and every line they type is appended here,
//! in order, so the `log` command can save an exact copy of the session.

use std::io::{self, Write};
use std::path::Path;

use flashdeck_core::fs::write_atomically;

#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every recorded line, one per line.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Save the transcript to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        write_atomically(path, |writer| self.write_to(writer))
    }
}
