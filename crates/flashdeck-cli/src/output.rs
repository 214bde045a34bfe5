//! Message formatting for the interactive session.
//!
//! Every function returns the plain text shown to the user and recorded in
//! the transcript.

use flashdeck_core::{Grade, Hardest};

pub fn card_exists(term: &str) -> String {
    format!("The card \"{}\" already exists.", term)
}

pub fn definition_exists(definition: &str) -> String {
    format!("The definition \"{}\" already exists.", definition)
}

pub fn pair_added(term: &str, definition: &str) -> String {
    format!("The pair (\"{}\":\"{}\") has been added.", term, definition)
}

pub fn cannot_remove(term: &str) -> String {
    format!("Can't remove \"{}\": there is no such card.", term)
}

pub fn cards_loaded(count: usize) -> String {
    format!("{} cards have been loaded.", count)
}

pub fn cards_saved(count: usize) -> String {
    format!("{} cards have been saved.", count)
}

pub fn ask_definition(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

/// Verdict line for a graded answer.
pub fn verdict(grade: &Grade, definition: &str) -> String {
    match grade {
        Grade::Correct => crate::constants::messages::CORRECT.to_string(),
        Grade::WrongNoMatch => format!("Wrong answer. The correct one is \"{}\".", definition),
        Grade::WrongCrossMatch(other) => format!(
            "Wrong answer. The correct one is \"{}\", you've just written the definition of \"{}\".",
            definition, other
        ),
    }
}

pub fn hardest(result: &Hardest) -> String {
    match result {
        Hardest::NoErrors => crate::constants::messages::NO_ERRORS.to_string(),
        Hardest::Unique { term, count } => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            term, count
        ),
        Hardest::Tied { terms, count } => {
            let quoted: Vec<String> = terms.iter().map(|term| format!("\"{}\"", term)).collect();
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                quoted.join(", "),
                count
            )
        }
    }
}
