use std::io::Write;

use flashdeck_core::{Deck, Hardest};

use crate::constants::messages;
use crate::helpers::Prompter;
use crate::output;
use crate::session::Console;
use crate::ui::Badge;

use super::Flow;

pub fn handle_hardest<P: Prompter, W: Write>(
    deck: &Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    let hardest = deck.hardest();
    let kind = match hardest {
        Hardest::NoErrors => Badge::Info,
        _ => Badge::Warn,
    };
    console.report(kind, &output::hardest(&hardest))?;
    Ok(Flow::Continue)
}

pub fn handle_reset_stats<P: Prompter, W: Write>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
) -> anyhow::Result<Flow> {
    deck.reset_stats();
    console.report(Badge::Ok, messages::STATS_RESET)?;
    Ok(Flow::Continue)
}
