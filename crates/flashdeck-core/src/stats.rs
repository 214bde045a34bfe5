//! Mistake statistics.

use crate::deck::{Hardest, MistakeTracker};

/// Find the term(s) with the most mistakes.
pub fn hardest(tracker: &MistakeTracker) -> Hardest {
    match tracker.maxima() {
        None => Hardest::NoErrors,
        Some((count, mut terms)) if terms.len() == 1 => Hardest::Unique {
            term: terms.remove(0),
            count,
        },
        Some((count, terms)) => Hardest::Tied { terms, count },
    }
}
