//! Per-term mistake counters.

use std::collections::BTreeMap;

/// Mistake counts keyed by term.
///
/// A term with no entry has zero mistakes, and no entry ever holds zero, so
/// an empty tracker means "no errors". Entries are kept in term order so
/// tied maxima come out sorted.
#[derive(Debug, Clone, Default)]
pub struct MistakeTracker {
    counts: BTreeMap<String, u32>,
}

impl MistakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `term`, starting from 1 when absent.
    ///
    /// Returns the new total.
    pub fn record_mistake(&mut self, term: &str) -> u32 {
        let count = self.counts.entry(term.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Overwrite the counter for `term`. A count of 0 drops the entry.
    pub fn set(&mut self, term: &str, count: u32) {
        if count == 0 {
            self.counts.remove(term);
        } else {
            self.counts.insert(term.to_string(), count);
        }
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    /// Drop the counter for `term`; absent terms are ignored.
    pub fn remove(&mut self, term: &str) {
        self.counts.remove(term);
    }

    pub fn count_for(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// The highest count and every term holding it, sorted.
    ///
    /// Returns `None` when the tracker has no entries at all, so callers can
    /// report "no errors" instead of a zero-valued tie.
    pub fn maxima(&self) -> Option<(u32, Vec<String>)> {
        let max = self.counts.values().copied().max()?;
        let terms = self
            .counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(term, _)| term.clone())
            .collect();
        Some((max, terms))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
