//! Term -> definition storage.

use std::collections::BTreeMap;

use crate::error::{DeckError, Result};

/// Ordered card storage keyed by term.
///
/// Iteration is always lexicographic by term, which fixes the export order
/// and makes "first card with this definition" deterministic.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: BTreeMap<String, String>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new card.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateTerm` if the term is taken, then
    /// `DeckError::DuplicateDefinition` if another card already has this
    /// exact definition. The store is untouched on error.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<()> {
        if self.cards.contains_key(term) {
            return Err(DeckError::DuplicateTerm(term.to_string()));
        }
        if self.contains_definition(definition) {
            return Err(DeckError::DuplicateDefinition(definition.to_string()));
        }
        self.cards.insert(term.to_string(), definition.to_string());
        Ok(())
    }

    /// Insert or replace a card without any uniqueness checks.
    ///
    /// Returns the previous definition, if any.
    pub fn upsert(&mut self, term: &str, definition: &str) -> Option<String> {
        self.cards.insert(term.to_string(), definition.to_string())
    }

    /// Remove a card.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::NotFound` if there is no card with this term.
    pub fn remove(&mut self, term: &str) -> Result<()> {
        self.cards
            .remove(term)
            .map(|_| ())
            .ok_or_else(|| DeckError::NotFound(term.to_string()))
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.cards.get(term).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.values().any(|value| value == definition)
    }

    /// First term, in key order, whose definition equals `definition`.
    pub fn find_term_by_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|(_, value)| value.as_str() == definition)
            .map(|(term, _)| term.as_str())
    }

    /// All terms, sorted.
    pub fn all_terms(&self) -> Vec<String> {
        self.cards.keys().cloned().collect()
    }

    /// Ordered `(term, definition)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cards
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
