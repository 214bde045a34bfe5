//! The interactive menu loop.

mod console;

pub use console::Console;

use std::io::Write;
use std::path::{Path, PathBuf};

use flashdeck_core::Deck;
use rand::Rng;

use crate::commands::{self, Flow};
use crate::constants::{messages, prompts};
use crate::helpers::{Action, Prompter};

/// One run of the menu: the deck, the console and the exit-time export.
pub struct Session<P, W, R> {
    deck: Deck,
    console: Console<P, W>,
    rng: R,
    export_on_exit: Option<PathBuf>,
}

impl<P: Prompter, W: Write, R: Rng> Session<P, W, R> {
    pub fn new(console: Console<P, W>, rng: R) -> Self {
        Self {
            deck: Deck::new(),
            console,
            rng,
            export_on_exit: None,
        }
    }

    /// Save the deck to `path` when the session ends.
    pub fn export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    #[cfg(test)]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<P, W> {
        &self.console
    }

    /// Load a card file before the menu starts.
    pub fn import(&mut self, path: &Path) -> anyhow::Result<()> {
        commands::import_file(&mut self.deck, &mut self.console, path)
    }

    /// Run the menu until `exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(line) = self.console.ask(prompts::ACTION)? else {
                tracing::debug!("input closed; ending session");
                break;
            };

            let Some(action) = Action::parse(&line) else {
                self.console.say(messages::WRONG_COMMAND)?;
                continue;
            };
            if action == Action::Exit {
                break;
            }

            tracing::debug!(?action, "dispatching action");
            if self.dispatch(action)? == Flow::Exit {
                break;
            }
            self.console.say("")?;
        }
        self.finish()
    }

    fn dispatch(&mut self, action: Action) -> anyhow::Result<Flow> {
        let deck = &mut self.deck;
        let console = &mut self.console;
        match action {
            Action::Add => commands::handle_add(deck, console),
            Action::Remove => commands::handle_remove(deck, console),
            Action::Import => commands::handle_import(deck, console),
            Action::Export => commands::handle_export(deck, console),
            Action::Ask => commands::handle_ask(deck, console, &mut self.rng),
            Action::Log => commands::handle_log(console),
            Action::HardestCard => commands::handle_hardest(deck, console),
            Action::ResetStats => commands::handle_reset_stats(deck, console),
            Action::List => commands::handle_list(deck, console),
            Action::Exit => Ok(Flow::Exit),
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.console.say(messages::BYE)?;
        if let Some(path) = self.export_on_exit.clone() {
            commands::export_file(&mut self.deck, &mut self.console, &path)?;
        }
        Ok(())
    }
}
