//! The deck aggregate.
//!
//! `Deck` owns a `CardStore` and a `MistakeTracker` and is the only way to
//! change either, so every mistake counter always belongs to a live card.

mod mistakes;
mod store;
mod types;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use rand::Rng;

pub use mistakes::MistakeTracker;
pub use store::CardStore;
pub use types::{CardView, Grade, Hardest};

use crate::card_file::{self, CardRecord};
use crate::error::{DeckError, Result};
use crate::events::{DeckEvent, EventSink, TracingSink};
use crate::fs::write_atomically;
use crate::quiz::{self, Draws};
use crate::stats;

/// A set of flashcards with their mistake statistics.
#[derive(Debug, Default)]
pub struct Deck<S = TracingSink> {
    cards: CardStore,
    mistakes: MistakeTracker,
    sink: S,
}

impl Deck<TracingSink> {
    /// Create an empty deck that reports events through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EventSink> Deck<S> {
    /// Create an empty deck that reports events to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            cards: CardStore::new(),
            mistakes: MistakeTracker::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn mistake_tracker(&self) -> &MistakeTracker {
        &self.mistakes
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // --- Card operations ---

    /// Add a new card.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateTerm` or `DeckError::DuplicateDefinition`
    /// and leaves the deck unchanged.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<()> {
        self.cards.add(term, definition)?;
        tracing::info!(term = %term, "card added");
        self.sink.notify(&DeckEvent::CardAdded {
            term: term.to_string(),
        });
        Ok(())
    }

    /// Remove a card and its mistake counter.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::NotFound` if there is no such card.
    pub fn remove(&mut self, term: &str) -> Result<()> {
        self.cards.remove(term)?;
        self.mistakes.remove(term);
        tracing::info!(term = %term, "card removed");
        self.sink.notify(&DeckEvent::CardRemoved {
            term: term.to_string(),
        });
        Ok(())
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.cards.get(term)
    }

    pub fn mistakes_for(&self, term: &str) -> u32 {
        self.mistakes.count_for(term)
    }

    /// Snapshot of every card in term order.
    pub fn cards(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|(term, definition)| CardView {
                term: term.to_string(),
                definition: definition.to_string(),
                mistakes: self.mistakes.count_for(term),
            })
            .collect()
    }

    // --- Quiz operations ---

    /// Choose `count` terms to ask. Terms are drawn lazily as the iterator
    /// is consumed, so a card added or removed afterwards does not affect
    /// the draws.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyDeck` when `count > 0` and the deck is empty.
    pub fn quiz<'r, R>(&self, count: usize, rng: &'r mut R) -> Result<Draws<'r, R>>
    where
        R: Rng + ?Sized,
    {
        quiz::select_sequence(&self.cards.all_terms(), count, rng)
    }

    /// Grade an answer for `term`, counting a mistake if it is wrong.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::NotFound` if `term` is not in the deck.
    pub fn answer(&mut self, term: &str, answer: &str) -> Result<Grade> {
        if !self.cards.contains_term(term) {
            return Err(DeckError::NotFound(term.to_string()));
        }

        let grade = quiz::grade(term, answer, &self.cards);
        if !grade.is_correct() {
            let total = self.mistakes.record_mistake(term);
            tracing::debug!(term = %term, total, "mistake recorded");
            self.sink.notify(&DeckEvent::MistakeRecorded {
                term: term.to_string(),
                total,
            });
        }
        Ok(grade)
    }

    // --- Statistics ---

    pub fn hardest(&self) -> Hardest {
        stats::hardest(&self.mistakes)
    }

    pub fn reset_stats(&mut self) {
        self.mistakes.reset();
        tracing::info!("mistake statistics reset");
        self.sink.notify(&DeckEvent::StatsReset);
    }

    // --- Import / export ---

    /// Merge records from a card file reader.
    ///
    /// Each record replaces any card with the same term, along with its
    /// mistake count. Returns the number of records read.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Io` if reading fails. Records read before the
    /// failure are not applied.
    pub fn import_from<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let records = card_file::read_records(reader)?;
        let count = records.len();
        for CardRecord {
            term,
            definition,
            mistakes,
        } in records
        {
            self.cards.upsert(&term, &definition);
            self.mistakes.set(&term, mistakes);
        }
        tracing::info!(count, "cards imported");
        self.sink.notify(&DeckEvent::Imported { count });
        Ok(count)
    }

    /// Import a card file from disk.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::FileNotFound` if `path` does not exist and
    /// `DeckError::Io` for any other read failure.
    pub fn import_from_path(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DeckError::FileNotFound(path.to_path_buf()),
            _ => DeckError::Io(err),
        })?;
        self.import_from(BufReader::new(file))
    }

    /// Write every card in term order. Returns the number of records.
    pub fn export_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<usize> {
        let count = self.write_cards(writer)?;
        self.sink.notify(&DeckEvent::Exported { count });
        Ok(count)
    }

    /// Export to a file, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Io` if the destination cannot be written; the
    /// previous contents of `path`, if any, are kept.
    pub fn export_to_path(&mut self, path: &Path) -> Result<usize> {
        let count = write_atomically(path, |writer| self.write_cards(writer))?;
        tracing::info!(count, path = %path.display(), "cards exported");
        self.sink.notify(&DeckEvent::Exported { count });
        Ok(count)
    }

    fn write_cards<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<usize> {
        let records = self
            .cards
            .iter()
            .map(|(term, definition)| (term, definition, self.mistakes.count_for(term)));
        card_file::write_records(writer, records)
    }
}
