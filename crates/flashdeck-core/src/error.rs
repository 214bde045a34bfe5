//! Error types for flashdeck core operations.
//!
//! Every variant is recoverable: the CLI layer maps these to user-facing
//! messages and keeps the session running.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Core error type for deck operations.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A card with this term already exists
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    /// Another card already uses this exact definition
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    /// No card with this term
    #[error("Not found: {0}")]
    NotFound(String),

    /// Import source does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Read or write failure on a card file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A quiz was requested but the deck holds no cards
    #[error("The deck is empty")]
    EmptyDeck,
}

impl DeckError {
    /// True for the errors that mean "the thing you named is not there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeckError::NotFound(_) | DeckError::FileNotFound(_))
    }
}
