//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or configuration.
    pub const INVALID_INPUT: i32 = 4;
}

/// Prompts shown by the interactive session.
pub mod prompts {
    pub const ACTION: &str =
        "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";
    pub const CARD: &str = "The card:";
    pub const DEFINITION: &str = "The definition of the card:";
    pub const FILE_NAME: &str = "File name:";
    pub const HOW_MANY: &str = "How many to ask?";
}

/// Fixed messages shown by the interactive session.
pub mod messages {
    pub const FILE_NOT_FOUND: &str = "File not found.";
    pub const CARD_REMOVED: &str = "The card has been removed.";
    pub const CORRECT: &str = "Correct answer";
    pub const NO_CARDS: &str = "There are no cards to ask.";
    pub const BAD_COUNT: &str = "Please enter a non-negative number.";
    pub const NO_ERRORS: &str = "There are no cards with errors.";
    pub const STATS_RESET: &str = "Card statistics have been reset.";
    pub const LOG_SAVED: &str = "The log has been saved.";
    pub const WRONG_COMMAND: &str = "Wrong command.";
    pub const BYE: &str = "Bye bye!";
}
