//! Handlers for the session actions.
//!
//! Each handler reads what it needs through the `Console`, applies one deck
//! operation and reports the outcome. Deck errors are reported to the user
//! and never end the session; only console IO failures propagate.

mod cards;
mod files;
mod misc;
mod quiz;
mod stats;

pub use cards::{handle_add, handle_list, handle_remove};
pub use files::{export_file, handle_export, handle_import, handle_log, import_file};
pub use misc::handle_completions;
pub use quiz::handle_ask;
pub use stats::{handle_hardest, handle_reset_stats};

/// Whether the session keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Input ended in the middle of a command
    Exit,
}
