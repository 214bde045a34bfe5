use std::io::Write;

use flashdeck_core::{Deck, DeckError};

use crate::constants::{messages, prompts};
use crate::helpers::Prompter;
use crate::output;
use crate::session::Console;
use crate::ui::{self, Badge, Column};

use super::Flow;

pub fn handle_add<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    let Some(term) = console.ask(prompts::CARD)? else {
        return Ok(Flow::Exit);
    };
    if deck.get(&term).is_some() {
        console.report(Badge::Warn, &output::card_exists(&term))?;
        return Ok(Flow::Continue);
    }

    let Some(definition) = console.ask(prompts::DEFINITION)? else {
        return Ok(Flow::Exit);
    };
    match deck.add(&term, &definition) {
        Ok(()) => console.report(Badge::Ok, &output::pair_added(&term, &definition))?,
        Err(DeckError::DuplicateTerm(term)) => {
            console.report(Badge::Warn, &output::card_exists(&term))?
        }
        Err(DeckError::DuplicateDefinition(definition)) => {
            console.report(Badge::Warn, &output::definition_exists(&definition))?
        }
        Err(err) => return Err(err.into()),
    }
    Ok(Flow::Continue)
}

pub fn handle_remove<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    let Some(term) = console.ask(prompts::CARD)? else {
        return Ok(Flow::Exit);
    };
    match deck.remove(&term) {
        Ok(()) => console.report(Badge::Ok, messages::CARD_REMOVED)?,
        Err(err) if err.is_not_found() => {
            console.report(Badge::Warn, &output::cannot_remove(&term))?
        }
        Err(err) => return Err(err.into()),
    }
    Ok(Flow::Continue)
}

pub fn handle_list<P: Prompter, W: Write>(
    deck: &Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    if deck.is_empty() {
        let text = ui::hint(
            console.ui(),
            "No cards yet. Use \"add\" or \"import\" to create some.",
        );
        console.block(&text)?;
        return Ok(Flow::Continue);
    }

    let columns = [
        Column::new("Term"),
        Column::new("Definition"),
        Column::new("Mistakes"),
    ];
    let rows: Vec<Vec<String>> = deck
        .cards()
        .into_iter()
        .map(|card| vec![card.term, card.definition, card.mistakes.to_string()])
        .collect();
    let text = ui::table(console.ui(), &columns, &rows);
    console.block(&text)?;
    Ok(Flow::Continue)
}
