//! Console IO for the session: prompts, answers and messages.

use std::io::{self, Write};

use crate::helpers::Prompter;
use crate::transcript::Transcript;
use crate::ui::{self, Badge, UiContext};

/// Prompt/answer channel that records everything it shows and reads.
pub struct Console<P, W> {
    prompter: P,
    out: W,
    ui: UiContext,
    transcript: Transcript,
}

impl<P: Prompter, W: Write> Console<P, W> {
    pub fn new(prompter: P, out: W, ui: UiContext) -> Self {
        Self {
            prompter,
            out,
            ui,
            transcript: Transcript::new(),
        }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Print a plain message.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        self.emit(message, message)
    }

    /// Print a status message, decorated with a badge in pretty mode.
    pub fn report(&mut self, kind: Badge, message: &str) -> io::Result<()> {
        let rendered = ui::status(&self.ui, kind, message);
        self.emit(&rendered, message)
    }

    /// Print a pre-rendered block (e.g. a table); the transcript keeps it as shown.
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        for line in text.lines() {
            self.transcript.record(line);
        }
        Ok(())
    }

    /// Show `prompt` and read one answer. `Ok(None)` means end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.prompter.renders_prompt() {
            self.transcript.record(prompt);
        } else {
            self.say(prompt)?;
        }

        let answer = self.prompter.read_line(prompt)?;
        if let Some(line) = &answer {
            self.transcript.record(line.as_str());
        }
        Ok(answer)
    }

    fn emit(&mut self, rendered: &str, plain: &str) -> io::Result<()> {
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        self.transcript.record(plain);
        Ok(())
    }
}
