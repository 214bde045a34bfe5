use std::io::Write;
use std::path::Path;

use flashdeck_core::{Deck, DeckError};

use crate::constants::{messages, prompts};
use crate::helpers::Prompter;
use crate::output;
use crate::session::Console;
use crate::ui::Badge;

use super::Flow;

pub fn handle_import<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    let Some(name) = console.ask(prompts::FILE_NAME)? else {
        return Ok(Flow::Exit);
    };
    import_file(deck, console, Path::new(&name))?;
    Ok(Flow::Continue)
}

pub fn handle_export<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    let Some(name) = console.ask(prompts::FILE_NAME)? else {
        return Ok(Flow::Exit);
    };
    export_file(deck, console, Path::new(&name))?;
    Ok(Flow::Continue)
}

pub fn handle_log<P: Prompter, W: Write>(console: &mut Console<P, W>) -> anyhow::Result<Flow> {
    let Some(name) = console.ask(prompts::FILE_NAME)? else {
        return Ok(Flow::Exit);
    };
    match console.transcript().save(Path::new(&name)) {
        Ok(()) => console.report(Badge::Ok, messages::LOG_SAVED)?,
        Err(err) => {
            tracing::warn!(path = %name, error = %err, "failed to save log");
            console.report(Badge::Err, messages::FILE_NOT_FOUND)?;
        }
    }
    Ok(Flow::Continue)
}

/// Merge the card file at `path` into the deck and report the outcome.
///
/// Unreadable files are reported as "File not found." and leave the deck
/// unchanged.
pub fn import_file<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
    path: &Path,
) -> anyhow::Result<()> {
    match deck.import_from_path(path) {
        Ok(count) => console.report(Badge::Ok, &output::cards_loaded(count))?,
        Err(err @ (DeckError::FileNotFound(_) | DeckError::Io(_))) => {
            tracing::warn!(path = %path.display(), error = %err, "import failed");
            console.report(Badge::Err, messages::FILE_NOT_FOUND)?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Write the deck to `path` and report the outcome.
pub fn export_file<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
    path: &Path,
) -> anyhow::Result<()> {
    match deck.export_to_path(path) {
        Ok(count) => console.report(Badge::Ok, &output::cards_saved(count))?,
        Err(err @ (DeckError::FileNotFound(_) | DeckError::Io(_))) => {
            tracing::warn!(path = %path.display(), error = %err, "export failed");
            console.report(Badge::Err, messages::FILE_NOT_FOUND)?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
