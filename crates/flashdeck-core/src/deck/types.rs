//! Value types returned by deck operations.

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grade {
    /// Answer equals the card's definition exactly
    Correct,

    /// Answer matches no definition in the deck
    WrongNoMatch,

    /// Answer is the definition of this term instead
    WrongCrossMatch(String),
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self, Grade::Correct)
    }
}

/// Result of the hardest-card analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hardest {
    /// No mistake counters exist
    NoErrors,

    /// A single term holds the highest count
    Unique { term: String, count: u32 },

    /// Several terms share the highest count, sorted
    Tied { terms: Vec<String>, count: u32 },
}

/// Read-only snapshot of one card and its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}
