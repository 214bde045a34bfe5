//! Answer grading.

use crate::deck::{CardStore, Grade};

/// Grade `answer` against the definition of `term`.
///
/// Comparison is exact: case and whitespace count. A wrong answer that is
/// the definition of some other card is reported as a cross-match naming the
/// first such card in term order.
///
/// A term missing from the store has no definition to match, so every
/// answer is wrong for it. `Deck::answer` rejects missing terms before
/// grading.
pub fn grade(term: &str, answer: &str, store: &CardStore) -> Grade {
    if store.get(term) == Some(answer) {
        return Grade::Correct;
    }
    match store.find_term_by_definition(answer) {
        Some(owner) => Grade::WrongCrossMatch(owner.to_string()),
        None => Grade::WrongNoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> CardStore {
        let mut store = CardStore::new();
        store.add("dog", "an animal").unwrap();
        store.add("cat", "a pet").unwrap();
        store
    }

    #[test]
    fn test_correct() {
        assert_eq!(grade("dog", "an animal", &pets()), Grade::Correct);
    }

    #[test]
    fn test_cross_match() {
        assert_eq!(
            grade("dog", "a pet", &pets()),
            Grade::WrongCrossMatch("cat".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(grade("dog", "xyz", &pets()), Grade::WrongNoMatch);
    }

    #[test]
    fn test_exact_comparison() {
        let store = pets();
        assert_eq!(grade("dog", "An animal", &store), Grade::WrongNoMatch);
        assert_eq!(grade("dog", "an animal ", &store), Grade::WrongNoMatch);
    }

    #[test]
    fn test_cross_match_picks_first_owner() {
        // Repeated definitions only arrive through import.
        let mut store = CardStore::new();
        store.upsert("zulu", "shared");
        store.upsert("bravo", "shared");
        store.upsert("mike", "own");
        assert_eq!(
            grade("mike", "shared", &store),
            Grade::WrongCrossMatch("bravo".to_string())
        );
        assert_eq!(grade("zulu", "shared", &store), Grade::Correct);
    }
}
