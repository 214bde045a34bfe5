//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Reading answers from a terminal or a plain line stream (`input`)
//! - Parsing actions and question counts (`parsing`)

mod input;
mod parsing;

pub use input::{LinePrompter, Prompter, TerminalPrompter};
pub use parsing::{parse_question_count, Action};
