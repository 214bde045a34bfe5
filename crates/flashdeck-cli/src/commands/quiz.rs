use std::io::Write;

use flashdeck_core::{Deck, DeckError};
use rand::Rng;

use crate::constants::{messages, prompts};
use crate::helpers::{parse_question_count, Prompter};
use crate::output;
use crate::session::Console;
use crate::ui::Badge;

use super::Flow;

/// Ask a number of random cards and grade each answer.
///
/// Each question draws a fresh card, so the same card may come up more than
/// once. A huge count is fine: cards are only drawn as they are asked.
pub fn handle_ask<P, W, R>(
    deck: &mut Deck,
    console: &mut Console<P, W>,
    rng: &mut R,
) -> anyhow::Result<Flow>
where
    P: Prompter,
    W: Write,
    R: Rng + ?Sized,
{
    let Some(reply) = console.ask(prompts::HOW_MANY)? else {
        return Ok(Flow::Exit);
    };
    let Some(count) = parse_question_count(&reply) else {
        console.report(Badge::Warn, messages::BAD_COUNT)?;
        return Ok(Flow::Continue);
    };

    let draws = match deck.quiz(count, rng) {
        Ok(draws) => draws,
        Err(DeckError::EmptyDeck) => {
            console.report(Badge::Warn, messages::NO_CARDS)?;
            return Ok(Flow::Continue);
        }
        Err(err) => return Err(err.into()),
    };

    for term in draws {
        let Some(answer) = console.ask(&output::ask_definition(&term))? else {
            return Ok(Flow::Exit);
        };
        let grade = deck.answer(&term, &answer)?;
        let definition = deck.get(&term).unwrap_or_default().to_string();
        let kind = if grade.is_correct() {
            Badge::Ok
        } else {
            Badge::Err
        };
        console.report(kind, &output::verdict(&grade, &definition))?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::LinePrompter;
    use crate::ui::UiContext;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn console(script: &str) -> Console<LinePrompter<&[u8]>, Vec<u8>> {
        Console::new(LinePrompter::new(script.as_bytes()), Vec::new(), UiContext::plain())
    }

    fn printed(console: &Console<LinePrompter<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_single_card_grading() {
        let mut deck = Deck::new();
        deck.add("cat", "a pet").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut console = console("3\na pet\nwrong\na pet\n");

        handle_ask(&mut deck, &mut console, &mut rng).unwrap();
        assert_eq!(
            printed(&console),
            "How many to ask?\n\
             Print the definition of \"cat\":\n\
             Correct answer\n\
             Print the definition of \"cat\":\n\
             Wrong answer. The correct one is \"a pet\".\n\
             Print the definition of \"cat\":\n\
             Correct answer\n"
        );
        assert_eq!(deck.mistakes_for("cat"), 1);
    }

    #[test]
    fn test_cross_match_verdict() {
        let mut deck = Deck::new();
        deck.add("cat", "a pet").unwrap();
        deck.add("dog", "an animal").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let asked: Vec<String> = deck
            .quiz(1, &mut StdRng::seed_from_u64(1))
            .unwrap()
            .collect();
        let other = if asked[0] == "cat" { "an animal" } else { "a pet" };
        let owner = if asked[0] == "cat" { "dog" } else { "cat" };
        let script = format!("1\n{}\n", other);
        let mut console = console(&script);

        handle_ask(&mut deck, &mut console, &mut rng).unwrap();
        let expected = format!("you've just written the definition of \"{}\".\n", owner);
        assert!(printed(&console).ends_with(&expected));
        assert_eq!(deck.mistakes_for(&asked[0]), 1);
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut console = console("2\n");

        handle_ask(&mut deck, &mut console, &mut rng).unwrap();
        assert!(printed(&console).ends_with("There are no cards to ask.\n"));
    }

    #[test]
    fn test_zero_questions_on_empty_deck() {
        let mut deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut console = console("0\n");

        handle_ask(&mut deck, &mut console, &mut rng).unwrap();
        assert_eq!(printed(&console), "How many to ask?\n");
    }

    #[test]
    fn test_bad_count() {
        let mut deck = Deck::new();
        deck.add("cat", "a pet").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut console = console("many\n");

        assert_eq!(
            handle_ask(&mut deck, &mut console, &mut rng).unwrap(),
            Flow::Continue
        );
        assert!(printed(&console).ends_with("Please enter a non-negative number.\n"));
    }

    #[test]
    fn test_huge_count_asks_until_input_ends() {
        let mut deck = Deck::new();
        deck.add("cat", "a pet").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let script = format!("{}\na pet\nwrong\n", usize::MAX);
        let mut console = console(&script);

        assert_eq!(
            handle_ask(&mut deck, &mut console, &mut rng).unwrap(),
            Flow::Exit
        );
        assert_eq!(deck.mistakes_for("cat"), 1);
        assert_eq!(
            printed(&console),
            "How many to ask?\n\
             Print the definition of \"cat\":\n\
             Correct answer\n\
             Print the definition of \"cat\":\n\
             Wrong answer. The correct one is \"a pet\".\n\
             Print the definition of \"cat\":\n"
        );
    }

    #[test]
    fn test_eof_mid_quiz_exits() {
        let mut deck = Deck::new();
        deck.add("cat", "a pet").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut console = console("2\na pet\n");

        assert_eq!(
            handle_ask(&mut deck, &mut console, &mut rng).unwrap(),
            Flow::Exit
        );
        assert_eq!(deck.mistakes_for("cat"), 0);
    }
}
