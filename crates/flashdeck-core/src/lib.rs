//! # Flashdeck Core
//!
//! Core library for Flashdeck - a command-line flashcard trainer.
//!
//! This crate provides the quiz and statistics engine independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **deck**: The `Deck` aggregate with its card store and mistake tracker
//! - **quiz**: Question selection and answer grading
//! - **stats**: Hardest-card analysis
//! - **card_file**: The three-line-per-card import/export format
//! - **events**: Observer hook for deck changes
//! - **fs**: Atomic file writes

pub mod card_file;
pub mod deck;
pub mod error;
pub mod events;
pub mod fs;
pub mod quiz;
pub mod stats;

pub use deck::{CardView, Deck, Grade, Hardest};
pub use error::{DeckError, Result};
pub use events::{DeckEvent, EventSink, TracingSink};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
